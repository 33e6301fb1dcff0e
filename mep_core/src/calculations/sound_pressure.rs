//! # Sound Pressure Level Calculation
//!
//! Direct-field SPL at a listener position from one speaker, following the
//! inverse-square law. The level is checked against the required SPL for
//! the application (minimum sense): paging systems typically need the
//! program level plus intelligibility headroom above ambient noise.
//!
//! ## Assumptions
//!
//! - Free-field (direct sound only; room contribution ignored)
//! - On-axis listener; off-axis rolloff not modeled
//! - Reference distance 1 m, matching sensitivity data
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::sound_pressure::{SoundPressureInput, SpeakerSource, calculate};
//! use mep_core::tables::speakers::SpeakerModel;
//!
//! let input = SoundPressureInput {
//!     label: "Concourse".to_string(),
//!     source: SpeakerSource::Preset { model: SpeakerModel::Ceiling6 },
//!     tap_power_w: 10.0,
//!     listener_distance_m: 10.0,
//!     required_spl_db: 75.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("SPL at listener: {:.1} dB", result.spl_at_listener_db);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::acoustics::{spl_at_distance, spl_at_one_meter};
use crate::tables::speakers::SpeakerModel;
use crate::trace::CalcTrace;

/// Reference distance for sensitivity data (m)
const REFERENCE_DISTANCE_M: f64 = 1.0;

/// Where the speaker's electro-acoustic data comes from.
///
/// ## JSON Examples
///
/// ```json
/// { "kind": "Preset", "model": "Ceiling6" }
/// { "kind": "Manual", "sensitivity_db": 91.0, "max_power_w": 40.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SpeakerSource {
    /// Use a catalogue preset
    Preset { model: SpeakerModel },
    /// Manually entered data for a specific product
    Manual {
        /// On-axis sensitivity at 1 W / 1 m (dB SPL)
        sensitivity_db: f64,
        /// Maximum continuous power (W)
        max_power_w: f64,
    },
}

impl SpeakerSource {
    /// Sensitivity at 1 W / 1 m (dB SPL)
    pub fn sensitivity_db(&self) -> f64 {
        match self {
            SpeakerSource::Preset { model } => model.preset().sensitivity_db,
            SpeakerSource::Manual { sensitivity_db, .. } => *sensitivity_db,
        }
    }

    /// Maximum continuous power (W)
    pub fn max_power_w(&self) -> f64 {
        match self {
            SpeakerSource::Preset { model } => model.preset().max_power_w,
            SpeakerSource::Manual { max_power_w, .. } => *max_power_w,
        }
    }
}

/// Input parameters for a listener SPL check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundPressureInput {
    /// User label for this position (e.g., "Concourse")
    pub label: String,

    /// Speaker data source (preset or manual)
    pub source: SpeakerSource,

    /// Transformer tap / amplifier power delivered (W)
    pub tap_power_w: f64,

    /// Distance from speaker to listener (m)
    pub listener_distance_m: f64,

    /// Required SPL at the listener (dB)
    pub required_spl_db: f64,
}

impl SoundPressureInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.tap_power_w <= 0.0 {
            return Err(CalcError::invalid_input(
                "tap_power_w",
                self.tap_power_w.to_string(),
                "Tap power must be positive",
            ));
        }
        let max_power = self.source.max_power_w();
        if max_power <= 0.0 {
            return Err(CalcError::invalid_input(
                "source.max_power_w",
                max_power.to_string(),
                "Speaker power rating must be positive",
            ));
        }
        if self.tap_power_w > max_power {
            return Err(CalcError::invalid_input(
                "tap_power_w",
                self.tap_power_w.to_string(),
                format!("Tap power exceeds the speaker's {max_power} W rating"),
            ));
        }
        if self.listener_distance_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "listener_distance_m",
                self.listener_distance_m.to_string(),
                "Listener distance must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a listener SPL check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundPressureResult {
    /// Sensitivity used (dB at 1 W / 1 m)
    pub sensitivity_db: f64,

    /// SPL at the 1 m reference distance (dB)
    pub spl_at_one_meter_db: f64,

    /// SPL at the listener (dB)
    pub spl_at_listener_db: f64,

    /// Level margin over the requirement (dB, negative when failing)
    pub headroom_db: f64,

    /// Check against the required SPL (minimum sense)
    pub compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl SoundPressureResult {
    /// Check if the listener SPL meets the requirement
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }
}

/// Calculate listener SPL and check it against the requirement.
pub fn calculate(input: &SoundPressureInput) -> CalcResult<SoundPressureResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    let sensitivity = input.source.sensitivity_db();
    let spl_1m = spl_at_one_meter(sensitivity, input.tap_power_w);
    trace.step(
        "SPL at 1 m",
        format!("{sensitivity} + 10 × log10({})", input.tap_power_w),
        spl_1m,
        "dB",
    );

    let spl_listener = spl_at_distance(spl_1m, input.listener_distance_m, REFERENCE_DISTANCE_M);
    trace.step(
        "SPL at listener",
        format!("{spl_1m:.1} − 20 × log10({} / 1)", input.listener_distance_m),
        spl_listener,
        "dB",
    );

    let compliance = Compliance::at_least(
        "Listener SPL",
        spl_listener,
        input.required_spl_db,
        "dB",
    );

    Ok(SoundPressureResult {
        sensitivity_db: sensitivity,
        spl_at_one_meter_db: spl_1m,
        spl_at_listener_db: spl_listener,
        headroom_db: spl_listener - input.required_spl_db,
        compliance,
        trace,
    })
}
