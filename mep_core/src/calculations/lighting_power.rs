//! # Lighting Power & Illuminance Calculation
//!
//! Two checks for a uniformly lit room, with opposite senses:
//!
//! - Lighting power density (LPD = connected load / floor area) must not
//!   exceed the space-type allowance.
//! - Average maintained illuminance by the lumen method must meet or exceed
//!   the space-type requirement.
//!
//! ## Lumen Method
//!
//! ```text
//! E_avg = N × F × UF × MF / A
//! ```
//!
//! where `N` is fixture count, `F` lumens per fixture, `UF` the utilization
//! factor for the room geometry/reflectances, `MF` the maintenance factor.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::lighting_power::{LightingInput, calculate};
//! use mep_core::tables::lighting::SpaceType;
//!
//! let input = LightingInput {
//!     label: "Office 2F".to_string(),
//!     room_length_m: 12.0,
//!     room_width_m: 8.0,
//!     space_type: SpaceType::OpenOffice,
//!     fixture_count: 24,
//!     watts_per_fixture: 36.0,
//!     lumens_per_fixture: 3600.0,
//!     utilization_factor: 0.8,
//!     maintenance_factor: 0.8,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("LPD {:.1} W/m², E {:.0} lx", result.lpd_w_per_m2, result.average_illuminance_lux);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::tables::lighting::SpaceType;
use crate::trace::CalcTrace;

/// Input parameters for a room lighting check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Office 2F",
///   "room_length_m": 12.0,
///   "room_width_m": 8.0,
///   "space_type": "OpenOffice",
///   "fixture_count": 24,
///   "watts_per_fixture": 36.0,
///   "lumens_per_fixture": 3600.0,
///   "utilization_factor": 0.8,
///   "maintenance_factor": 0.8
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingInput {
    /// User label for this room
    pub label: String,

    /// Room length (m)
    pub room_length_m: f64,

    /// Room width (m)
    pub room_width_m: f64,

    /// Space type, selecting the LPD allowance and required lux
    pub space_type: SpaceType,

    /// Number of luminaires
    pub fixture_count: u32,

    /// Circuit watts per luminaire, including driver/ballast losses
    pub watts_per_fixture: f64,

    /// Initial lumen output per luminaire
    pub lumens_per_fixture: f64,

    /// Utilization factor for room geometry and reflectances, in (0, 1]
    pub utilization_factor: f64,

    /// Maintenance factor for lamp depreciation and dirt, in (0, 1]
    pub maintenance_factor: f64,
}

impl LightingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.room_length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "room_length_m",
                self.room_length_m.to_string(),
                "Room length must be positive",
            ));
        }
        if self.room_width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "room_width_m",
                self.room_width_m.to_string(),
                "Room width must be positive",
            ));
        }
        if self.fixture_count == 0 {
            return Err(CalcError::invalid_input(
                "fixture_count",
                "0",
                "At least one fixture is required",
            ));
        }
        if self.watts_per_fixture <= 0.0 {
            return Err(CalcError::invalid_input(
                "watts_per_fixture",
                self.watts_per_fixture.to_string(),
                "Fixture wattage must be positive",
            ));
        }
        if self.lumens_per_fixture <= 0.0 {
            return Err(CalcError::invalid_input(
                "lumens_per_fixture",
                self.lumens_per_fixture.to_string(),
                "Fixture lumen output must be positive",
            ));
        }
        if self.utilization_factor <= 0.0 || self.utilization_factor > 1.0 {
            return Err(CalcError::invalid_input(
                "utilization_factor",
                self.utilization_factor.to_string(),
                "Utilization factor must be in (0, 1]",
            ));
        }
        if self.maintenance_factor <= 0.0 || self.maintenance_factor > 1.0 {
            return Err(CalcError::invalid_input(
                "maintenance_factor",
                self.maintenance_factor.to_string(),
                "Maintenance factor must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Floor area (m²)
    pub fn area_m2(&self) -> f64 {
        self.room_length_m * self.room_width_m
    }

    /// Total connected load (W)
    pub fn total_load_w(&self) -> f64 {
        self.fixture_count as f64 * self.watts_per_fixture
    }
}

/// Results from a room lighting check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingResult {
    /// Floor area (m²)
    pub area_m2: f64,

    /// Total connected lighting load (W)
    pub total_load_w: f64,

    /// Lighting power density (W/m²)
    pub lpd_w_per_m2: f64,

    /// Average maintained illuminance (lux)
    pub average_illuminance_lux: f64,

    /// Power density check (maximum sense)
    pub lpd_compliance: Compliance,

    /// Illuminance adequacy check (minimum sense)
    pub illuminance_compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl LightingResult {
    /// Check if both the LPD and illuminance checks pass
    pub fn passes(&self) -> bool {
        self.lpd_compliance.passes && self.illuminance_compliance.passes
    }
}

/// Calculate power density and average illuminance for a room.
pub fn calculate(input: &LightingInput) -> CalcResult<LightingResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    let area = input.area_m2();
    trace.step(
        "Floor area",
        format!("{} × {}", input.room_length_m, input.room_width_m),
        area,
        "m²",
    );

    let load = input.total_load_w();
    trace.step(
        "Connected load",
        format!("{} × {}", input.fixture_count, input.watts_per_fixture),
        load,
        "W",
    );

    // area > 0 is guaranteed by validation
    let lpd = load / area;
    trace.step("Lighting power density", format!("{load:.0} / {area:.1}"), lpd, "W/m²");

    let lumens = input.fixture_count as f64 * input.lumens_per_fixture;
    let illuminance = lumens * input.utilization_factor * input.maintenance_factor / area;
    trace.step(
        "Average illuminance",
        format!(
            "{} × {} × {} × {} / {area:.1}",
            input.fixture_count,
            input.lumens_per_fixture,
            input.utilization_factor,
            input.maintenance_factor
        ),
        illuminance,
        "lx",
    );

    let lpd_compliance = Compliance::at_most(
        "Lighting power density",
        lpd,
        input.space_type.lpd_limit_w_per_m2(),
        "W/m²",
    );
    let illuminance_compliance = Compliance::at_least(
        "Average illuminance",
        illuminance,
        input.space_type.required_lux(),
        "lx",
    );

    Ok(LightingResult {
        area_m2: area,
        total_load_w: load,
        lpd_w_per_m2: lpd,
        average_illuminance_lux: illuminance,
        lpd_compliance,
        illuminance_compliance,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_room() -> LightingInput {
        LightingInput {
            label: "Test Office".to_string(),
            room_length_m: 12.0,
            room_width_m: 8.0,
            space_type: SpaceType::OpenOffice,
            fixture_count: 24,
            watts_per_fixture: 36.0,
            lumens_per_fixture: 3600.0,
            utilization_factor: 0.8,
            maintenance_factor: 0.8,
        }
    }

    #[test]
    fn test_lpd_calculation() {
        let result = calculate(&test_room()).unwrap();
        // 24 × 36 / 96 = 9.0 W/m²
        assert!((result.lpd_w_per_m2 - 9.0).abs() < 1e-9);
        // below the 10.5 W/m² open-office allowance
        assert!(result.lpd_compliance.passes);
    }

    #[test]
    fn test_illuminance_calculation() {
        let result = calculate(&test_room()).unwrap();
        // 24 × 3600 × 0.8 × 0.8 / 96 = 576 lx
        assert!((result.average_illuminance_lux - 576.0).abs() < 1e-9);
        // above the 500 lx requirement
        assert!(result.illuminance_compliance.passes);
        assert!(result.passes());
    }

    #[test]
    fn test_opposite_senses() {
        // Overdriven fittings: LPD fails while illuminance passes
        let mut input = test_room();
        input.watts_per_fixture = 60.0;
        let result = calculate(&input).unwrap();
        assert!(!result.lpd_compliance.passes);
        assert!(result.illuminance_compliance.passes);
        assert!(!result.passes());

        // Sparse efficient fittings: LPD passes while illuminance fails
        let mut input = test_room();
        input.fixture_count = 8;
        let result = calculate(&input).unwrap();
        assert!(result.lpd_compliance.passes);
        assert!(!result.illuminance_compliance.passes);
    }

    #[test]
    fn test_corridor_targets() {
        let mut input = test_room();
        input.space_type = SpaceType::Corridor;
        let result = calculate(&input).unwrap();
        // 9.0 W/m² exceeds the 7.1 W/m² corridor allowance
        assert!(!result.lpd_compliance.passes);
        // 576 lx easily meets the 100 lx corridor requirement
        assert!(result.illuminance_compliance.passes);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_room();
        input.fixture_count = 0;
        assert!(calculate(&input).is_err());

        let mut input = test_room();
        input.utilization_factor = 1.2;
        assert!(calculate(&input).is_err());

        let mut input = test_room();
        input.room_width_m = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_trace_steps() {
        let result = calculate(&test_room()).unwrap();
        assert_eq!(result.trace.len(), 4);
        assert_eq!(result.trace.steps()[0].unit, "m²");
        assert_eq!(result.trace.steps()[3].unit, "lx");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_room();
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("lpd_w_per_m2"));
        let roundtrip: LightingResult = serde_json::from_str(&json).unwrap();
        assert!((result.average_illuminance_lux - roundtrip.average_illuminance_lux).abs() < 1e-9);
    }
}
