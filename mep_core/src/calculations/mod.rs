//! # Engineering Calculations
//!
//! This module contains all calculator types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, `validate()` before use)
//! - `*Result` - Calculation results with compliance checks and an audit
//!   trace (JSON-serializable)
//! - `calculate(&input) -> Result<*Result, CalcError>` - Pure calculation
//!   function
//!
//! Every evaluator is stateless and side-effect-free: the same input always
//! produces the same result, so calculators can be driven from a CLI, a
//! test harness, or a reactive form UI without correctness concerns.
//!
//! ## Available Calculations
//!
//! - [`voltage_drop`] - Cable voltage drop vs circuit-use limit
//! - [`copper_loss`] - Feeder I²R loss with trunk/branch diversity
//! - [`lighting_power`] - Lighting power density and illuminance
//! - [`sound_pressure`] - Listener SPL by the inverse-square law
//! - [`speaker_coverage`] - Ceiling speaker coverage and count
//! - [`reverberation`] - Sabine RT60 over six octave bands
//! - [`projector_throw`] - Projector throw distance and fit
//! - [`drainage`] - Sanitary drain sizing by fixture units

pub mod copper_loss;
pub mod drainage;
pub mod lighting_power;
pub mod projector_throw;
pub mod reverberation;
pub mod sound_pressure;
pub mod speaker_coverage;
pub mod voltage_drop;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use copper_loss::{CopperLossInput, CopperLossResult};
pub use drainage::{DrainSizingInput, DrainSizingResult};
pub use lighting_power::{LightingInput, LightingResult};
pub use projector_throw::{ProjectorThrowInput, ProjectorThrowResult};
pub use reverberation::{ReverberationInput, ReverberationResult};
pub use sound_pressure::{SoundPressureInput, SoundPressureResult};
pub use speaker_coverage::{SpeakerCoverageInput, SpeakerCoverageResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};

/// Common interface for all calculator inputs.
///
/// Implemented by every `*Input`; dispatching through this trait lets a
/// front end run any calculator without knowing its concrete type.
pub trait Evaluate {
    /// The calculator's result type
    type Output;

    /// Validate the input and run the pure calculation
    fn evaluate(&self) -> CalcResult<Self::Output>;
}

macro_rules! impl_evaluate {
    ($input:ty, $output:ty, $module:ident) => {
        impl Evaluate for $input {
            type Output = $output;

            fn evaluate(&self) -> CalcResult<Self::Output> {
                $module::calculate(self)
            }
        }
    };
}

impl_evaluate!(VoltageDropInput, VoltageDropResult, voltage_drop);
impl_evaluate!(CopperLossInput, CopperLossResult, copper_loss);
impl_evaluate!(LightingInput, LightingResult, lighting_power);
impl_evaluate!(SoundPressureInput, SoundPressureResult, sound_pressure);
impl_evaluate!(SpeakerCoverageInput, SpeakerCoverageResult, speaker_coverage);
impl_evaluate!(ReverberationInput, ReverberationResult, reverberation);
impl_evaluate!(ProjectorThrowInput, ProjectorThrowResult, projector_throw);
impl_evaluate!(DrainSizingInput, DrainSizingResult, drainage);

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization. Dispatch is by
/// pattern matching, never by comparing type strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Cable voltage drop check
    VoltageDrop(VoltageDropInput),
    /// Feeder copper loss check
    CopperLoss(CopperLossInput),
    /// Lighting power and illuminance check
    Lighting(LightingInput),
    /// Listener SPL check
    SoundPressure(SoundPressureInput),
    /// Ceiling speaker coverage check
    SpeakerCoverage(SpeakerCoverageInput),
    /// Reverberation time check
    Reverberation(ReverberationInput),
    /// Projector throw fit check
    ProjectorThrow(ProjectorThrowInput),
    /// Sanitary drain sizing check
    DrainSizing(DrainSizingInput),
}

/// Result counterpart of [`CalculationItem`], one variant per calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    /// Cable voltage drop results
    VoltageDrop(VoltageDropResult),
    /// Feeder copper loss results
    CopperLoss(CopperLossResult),
    /// Lighting power and illuminance results
    Lighting(LightingResult),
    /// Listener SPL results
    SoundPressure(SoundPressureResult),
    /// Ceiling speaker coverage results
    SpeakerCoverage(SpeakerCoverageResult),
    /// Reverberation time results
    Reverberation(ReverberationResult),
    /// Projector throw fit results
    ProjectorThrow(ProjectorThrowResult),
    /// Sanitary drain sizing results
    DrainSizing(DrainSizingResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::VoltageDrop(i) => &i.label,
            CalculationItem::CopperLoss(i) => &i.label,
            CalculationItem::Lighting(i) => &i.label,
            CalculationItem::SoundPressure(i) => &i.label,
            CalculationItem::SpeakerCoverage(i) => &i.label,
            CalculationItem::Reverberation(i) => &i.label,
            CalculationItem::ProjectorThrow(i) => &i.label,
            CalculationItem::DrainSizing(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::VoltageDrop(_) => "Voltage Drop",
            CalculationItem::CopperLoss(_) => "Copper Loss",
            CalculationItem::Lighting(_) => "Lighting",
            CalculationItem::SoundPressure(_) => "Sound Pressure",
            CalculationItem::SpeakerCoverage(_) => "Speaker Coverage",
            CalculationItem::Reverberation(_) => "Reverberation",
            CalculationItem::ProjectorThrow(_) => "Projector Throw",
            CalculationItem::DrainSizing(_) => "Drain Sizing",
        }
    }

    /// Run the calculation for whichever calculator this item wraps
    pub fn evaluate(&self) -> CalcResult<CalculationOutcome> {
        Ok(match self {
            CalculationItem::VoltageDrop(i) => CalculationOutcome::VoltageDrop(i.evaluate()?),
            CalculationItem::CopperLoss(i) => CalculationOutcome::CopperLoss(i.evaluate()?),
            CalculationItem::Lighting(i) => CalculationOutcome::Lighting(i.evaluate()?),
            CalculationItem::SoundPressure(i) => CalculationOutcome::SoundPressure(i.evaluate()?),
            CalculationItem::SpeakerCoverage(i) => {
                CalculationOutcome::SpeakerCoverage(i.evaluate()?)
            }
            CalculationItem::Reverberation(i) => CalculationOutcome::Reverberation(i.evaluate()?),
            CalculationItem::ProjectorThrow(i) => {
                CalculationOutcome::ProjectorThrow(i.evaluate()?)
            }
            CalculationItem::DrainSizing(i) => CalculationOutcome::DrainSizing(i.evaluate()?),
        })
    }
}

impl CalculationOutcome {
    /// Check if every compliance check in the outcome passes
    pub fn passes(&self) -> bool {
        match self {
            CalculationOutcome::VoltageDrop(r) => r.passes(),
            CalculationOutcome::CopperLoss(r) => r.passes(),
            CalculationOutcome::Lighting(r) => r.passes(),
            CalculationOutcome::SoundPressure(r) => r.passes(),
            CalculationOutcome::SpeakerCoverage(r) => r.passes(),
            CalculationOutcome::Reverberation(r) => r.passes(),
            CalculationOutcome::ProjectorThrow(r) => r.passes(),
            CalculationOutcome::DrainSizing(r) => r.passes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::cable::{Insulation, Phase};
    use crate::calculations::voltage_drop::CircuitUse;

    fn test_item() -> CalculationItem {
        CalculationItem::VoltageDrop(VoltageDropInput {
            label: "DB1-L1".to_string(),
            design_current_a: 16.0,
            route_length_m: 18.0,
            csa_mm2: 2.5,
            insulation: Insulation::Pvc,
            phase: Phase::SinglePhase,
            ambient_temp_c: 30.0,
            circuit_use: CircuitUse::Power,
        })
    }

    #[test]
    fn test_label_and_type() {
        let item = test_item();
        assert_eq!(item.label(), "DB1-L1");
        assert_eq!(item.calc_type(), "Voltage Drop");
    }

    #[test]
    fn test_evaluate_dispatch() {
        let outcome = test_item().evaluate().unwrap();
        match outcome {
            CalculationOutcome::VoltageDrop(ref r) => assert!(r.voltage_drop_v > 0.0),
            _ => panic!("dispatched to the wrong calculator"),
        }
        assert!(outcome.passes());
    }

    #[test]
    fn test_tagged_serialization() {
        let item = test_item();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"VoltageDrop\""));
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "DB1-L1");
    }

    #[test]
    fn test_evaluate_trait_direct() {
        if let CalculationItem::VoltageDrop(input) = test_item() {
            let result = input.evaluate().unwrap();
            assert!(result.passes());
        }
    }
}
