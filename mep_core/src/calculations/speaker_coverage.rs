//! # Ceiling Speaker Coverage Calculation
//!
//! Coverage radius of a ceiling speaker at the listening plane from its
//! dispersion cone, and the number of speakers needed to cover a floor
//! area. The proposed speaker count is checked against the requirement
//! (minimum sense).
//!
//! ## Geometry
//!
//! ```text
//! r = (h_ceiling − h_listener) × tan(θ/2)
//! ```
//!
//! A nominal dispersion of exactly 180° yields an unbounded cone: the
//! coverage radius is reported as the explicit infinite sentinel and a
//! single speaker covers any area.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::speaker_coverage::{SpeakerCoverageInput, calculate};
//!
//! let input = SpeakerCoverageInput {
//!     label: "Open Office".to_string(),
//!     ceiling_height_m: 3.2,
//!     listener_plane_m: 1.2,
//!     dispersion_deg: 120.0,
//!     room_length_m: 20.0,
//!     room_width_m: 12.0,
//!     proposed_speaker_count: 8,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("r = {:.2} m, need {}", result.coverage_radius_m, result.required_speaker_count);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::geometry::{coverage_radius_m, speakers_for_area};
use crate::trace::CalcTrace;

/// Input parameters for a speaker coverage check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Open Office",
///   "ceiling_height_m": 3.2,
///   "listener_plane_m": 1.2,
///   "dispersion_deg": 120.0,
///   "room_length_m": 20.0,
///   "room_width_m": 12.0,
///   "proposed_speaker_count": 8
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerCoverageInput {
    /// User label for this zone
    pub label: String,

    /// Ceiling (speaker) height above floor (m)
    pub ceiling_height_m: f64,

    /// Listening plane above floor (m): 1.2 seated, 1.7 standing
    pub listener_plane_m: f64,

    /// Nominal conical dispersion (degrees), in (0, 180]
    pub dispersion_deg: f64,

    /// Room length (m)
    pub room_length_m: f64,

    /// Room width (m)
    pub room_width_m: f64,

    /// Speakers in the proposed layout
    pub proposed_speaker_count: u32,
}

impl SpeakerCoverageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.ceiling_height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "ceiling_height_m",
                self.ceiling_height_m.to_string(),
                "Ceiling height must be positive",
            ));
        }
        if self.listener_plane_m < 0.0 {
            return Err(CalcError::invalid_input(
                "listener_plane_m",
                self.listener_plane_m.to_string(),
                "Listening plane must not be negative",
            ));
        }
        if self.listener_plane_m >= self.ceiling_height_m {
            return Err(CalcError::invalid_input(
                "listener_plane_m",
                self.listener_plane_m.to_string(),
                "Listening plane must be below the ceiling",
            ));
        }
        if self.dispersion_deg <= 0.0 || self.dispersion_deg > 180.0 {
            return Err(CalcError::invalid_input(
                "dispersion_deg",
                self.dispersion_deg.to_string(),
                "Dispersion must be in (0°, 180°]",
            ));
        }
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
        if self.proposed_speaker_count == 0 {
            return Err(CalcError::invalid_input(
                "proposed_speaker_count",
                "0",
                "At least one speaker is required",
            ));
        }
        Ok(())
    }

    /// Floor area (m²)
    pub fn area_m2(&self) -> f64 {
        self.room_length_m * self.room_width_m
    }
}

/// Results from a speaker coverage check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerCoverageResult {
    /// Vertical distance from speaker to listening plane (m)
    pub effective_height_m: f64,

    /// Coverage radius at the listening plane (m)
    ///
    /// The infinite sentinel (180° dispersion) serializes as JSON null.
    pub coverage_radius_m: f64,

    /// Floor area one speaker covers (m²); infinite for 180° dispersion
    pub area_per_speaker_m2: f64,

    /// Speakers required for edge-to-edge coverage of the floor
    pub required_speaker_count: u32,

    /// Check of proposed count against the requirement (minimum sense)
    pub compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl SpeakerCoverageResult {
    /// Check if the proposed layout has enough speakers
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }
}

/// Calculate coverage radius and required speaker count for a zone.
pub fn calculate(input: &SpeakerCoverageInput) -> CalcResult<SpeakerCoverageResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    let height = input.ceiling_height_m - input.listener_plane_m;
    trace.step(
        "Effective height",
        format!("{} − {}", input.ceiling_height_m, input.listener_plane_m),
        height,
        "m",
    );

    let radius = coverage_radius_m(height, input.dispersion_deg);
    trace.step(
        "Coverage radius",
        format!("{height:.2} × tan({} / 2)", input.dispersion_deg),
        radius,
        "m",
    );

    let area_each = if radius.is_infinite() {
        f64::INFINITY
    } else {
        std::f64::consts::PI * radius * radius
    };
    trace.step("Area per speaker", "π × r²", area_each, "m²");

    let area = input.area_m2();
    let required = speakers_for_area(area, radius);
    trace.step(
        "Speakers required",
        format!("ceil({area:.1} / {area_each:.1})"),
        required,
        "",
    );

    // required is finite here: validation guarantees a positive radius or
    // the infinite sentinel, which needs exactly one speaker
    let required_count = required as u32;

    let compliance = Compliance::at_least(
        "Speaker count",
        input.proposed_speaker_count as f64,
        required,
        "",
    );

    Ok(SpeakerCoverageResult {
        effective_height_m: height,
        coverage_radius_m: radius,
        area_per_speaker_m2: area_each,
        required_speaker_count: required_count,
        compliance,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_zone() -> SpeakerCoverageInput {
        SpeakerCoverageInput {
            label: "Test Zone".to_string(),
            ceiling_height_m: 3.2,
            listener_plane_m: 1.2,
            dispersion_deg: 120.0,
            room_length_m: 20.0,
            room_width_m: 12.0,
            proposed_speaker_count: 8,
        }
    }

    #[test]
    fn test_coverage_radius() {
        let result = calculate(&test_zone()).unwrap();
        // h = 2.0 m, tan(60°) ≈ 1.732 -> r ≈ 3.46 m
        assert!((result.effective_height_m - 2.0).abs() < 1e-12);
        assert!((result.coverage_radius_m - 3.464).abs() < 0.001);
    }

    #[test]
    fn test_required_count() {
        let result = calculate(&test_zone()).unwrap();
        // area 240 m², each covers π × 3.464² ≈ 37.7 m² -> 7 speakers
        assert_eq!(result.required_speaker_count, 7);
        assert!(result.passes());
    }

    #[test]
    fn test_insufficient_layout_fails() {
        let mut input = test_zone();
        input.proposed_speaker_count = 4;
        let result = calculate(&input).unwrap();
        assert!(!result.passes());
    }

    #[test]
    fn test_180_degree_infinite_sentinel() {
        let mut input = test_zone();
        input.dispersion_deg = 180.0;
        let result = calculate(&input).unwrap();
        assert!(result.coverage_radius_m.is_infinite());
        assert!(result.area_per_speaker_m2.is_infinite());
        assert_eq!(result.required_speaker_count, 1);
        assert!(result.passes());
    }

    #[test]
    fn test_dispersion_above_180_rejected() {
        // >180° is a data entry error, distinct from the exact-180° sentinel
        let mut input = test_zone();
        input.dispersion_deg = 200.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_listener_above_ceiling_rejected() {
        let mut input = test_zone();
        input.listener_plane_m = 3.5;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_narrow_dispersion_needs_more() {
        let wide = calculate(&test_zone()).unwrap();
        let mut input = test_zone();
        input.dispersion_deg = 60.0;
        let narrow = calculate(&input).unwrap();
        assert!(narrow.required_speaker_count > wide.required_speaker_count);
    }

    #[test]
    fn test_repeated_evaluation_identical() {
        let input = test_zone();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.coverage_radius_m.to_bits(), b.coverage_radius_m.to_bits());
        assert_eq!(a.required_speaker_count, b.required_speaker_count);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_zone()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("required_speaker_count"));
        let roundtrip: SpeakerCoverageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.required_speaker_count, roundtrip.required_speaker_count);
    }
}
