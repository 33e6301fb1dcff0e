//! # Projector Throw Calculation
//!
//! Screen geometry from diagonal and aspect ratio, throw distance from the
//! lens throw ratio, and a fit check against the depth available for the
//! projector.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::projector_throw::{ProjectorThrowInput, AspectRatio, calculate};
//!
//! let input = ProjectorThrowInput {
//!     label: "Boardroom".to_string(),
//!     screen_diagonal_m: 2.54, // 100"
//!     aspect: AspectRatio::SixteenNine,
//!     throw_ratio: 1.5,
//!     available_depth_m: 4.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Throw {:.2} m for a {:.2} m wide image", result.throw_distance_m, result.screen_width_m);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::geometry::{screen_dimensions_m, throw_distance_m};
use crate::trace::CalcTrace;

/// Screen aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AspectRatio {
    /// 16:9 widescreen
    #[default]
    SixteenNine,
    /// 16:10 workstation
    SixteenTen,
    /// 4:3 legacy
    FourThree,
    /// 2.39:1 cinemascope
    CinemaScope,
}

impl AspectRatio {
    /// All aspect ratios for UI selection
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::SixteenNine,
        AspectRatio::SixteenTen,
        AspectRatio::FourThree,
        AspectRatio::CinemaScope,
    ];

    /// (width, height) ratio terms
    pub fn terms(&self) -> (f64, f64) {
        match self {
            AspectRatio::SixteenNine => (16.0, 9.0),
            AspectRatio::SixteenTen => (16.0, 10.0),
            AspectRatio::FourThree => (4.0, 3.0),
            AspectRatio::CinemaScope => (2.39, 1.0),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AspectRatio::SixteenNine => "16:9",
            AspectRatio::SixteenTen => "16:10",
            AspectRatio::FourThree => "4:3",
            AspectRatio::CinemaScope => "2.39:1",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for a projector fit check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Boardroom",
///   "screen_diagonal_m": 2.54,
///   "aspect": "SixteenNine",
///   "throw_ratio": 1.5,
///   "available_depth_m": 4.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectorThrowInput {
    /// User label for this display position
    pub label: String,

    /// Screen diagonal (m)
    pub screen_diagonal_m: f64,

    /// Screen aspect ratio
    pub aspect: AspectRatio,

    /// Lens throw ratio (distance / image width)
    pub throw_ratio: f64,

    /// Depth available from screen to the rearmost mounting point (m)
    pub available_depth_m: f64,
}

impl ProjectorThrowInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.screen_diagonal_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "screen_diagonal_m",
                self.screen_diagonal_m.to_string(),
                "Screen diagonal must be positive",
            ));
        }
        if self.throw_ratio <= 0.0 {
            return Err(CalcError::invalid_input(
                "throw_ratio",
                self.throw_ratio.to_string(),
                "Throw ratio must be positive",
            ));
        }
        if self.available_depth_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "available_depth_m",
                self.available_depth_m.to_string(),
                "Available depth must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a projector fit check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectorThrowResult {
    /// Image width (m)
    pub screen_width_m: f64,

    /// Image height (m)
    pub screen_height_m: f64,

    /// Required lens-to-screen distance (m)
    pub throw_distance_m: f64,

    /// Check of throw distance against the available depth
    pub compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl ProjectorThrowResult {
    /// Check if the projector fits in the available depth
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }
}

/// Calculate screen geometry and throw distance, then check the fit.
pub fn calculate(input: &ProjectorThrowInput) -> CalcResult<ProjectorThrowResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    let (aw, ah) = input.aspect.terms();
    let (width, height) = screen_dimensions_m(input.screen_diagonal_m, aw, ah);
    trace.step(
        "Image width",
        format!("{} × {aw} / √({aw}² + {ah}²)", input.screen_diagonal_m),
        width,
        "m",
    );
    trace.step(
        "Image height",
        format!("{} × {ah} / √({aw}² + {ah}²)", input.screen_diagonal_m),
        height,
        "m",
    );

    let throw = throw_distance_m(input.throw_ratio, width);
    trace.step(
        "Throw distance",
        format!("{} × {width:.2}", input.throw_ratio),
        throw,
        "m",
    );

    let compliance = Compliance::at_most(
        "Throw distance",
        throw,
        input.available_depth_m,
        "m",
    );

    Ok(ProjectorThrowResult {
        screen_width_m: width,
        screen_height_m: height,
        throw_distance_m: throw,
        compliance,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_display() -> ProjectorThrowInput {
        ProjectorThrowInput {
            label: "Test Display".to_string(),
            screen_diagonal_m: 2.54,
            aspect: AspectRatio::SixteenNine,
            throw_ratio: 1.5,
            available_depth_m: 4.0,
        }
    }

    #[test]
    fn test_screen_geometry() {
        let result = calculate(&test_display()).unwrap();
        // 100" 16:9 -> 2.214 m × 1.245 m
        assert!((result.screen_width_m - 2.214).abs() < 0.001);
        assert!((result.screen_height_m - 1.245).abs() < 0.001);
    }

    #[test]
    fn test_throw_distance_and_fit() {
        let result = calculate(&test_display()).unwrap();
        // 1.5 × 2.214 = 3.32 m, fits in 4.0 m
        assert!((result.throw_distance_m - 3.321).abs() < 0.001);
        assert!(result.passes());
    }

    #[test]
    fn test_long_throw_fails() {
        let mut input = test_display();
        input.throw_ratio = 2.0;
        let result = calculate(&input).unwrap();
        // 4.43 m > 4.0 m available
        assert!(!result.passes());
        assert!(result.compliance.margin < 0.0);
    }

    #[test]
    fn test_aspect_changes_width() {
        let wide = calculate(&test_display()).unwrap();
        let mut input = test_display();
        input.aspect = AspectRatio::FourThree;
        let narrow = calculate(&input).unwrap();
        // same diagonal, 4:3 is narrower and taller than 16:9
        assert!(narrow.screen_width_m < wide.screen_width_m);
        assert!(narrow.screen_height_m > wide.screen_height_m);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_display();
        input.screen_diagonal_m = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_display();
        input.throw_ratio = -0.5;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_trace_steps() {
        let result = calculate(&test_display()).unwrap();
        assert_eq!(result.trace.len(), 3);
        assert!(result.trace.steps()[2].description.contains("Throw"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_display();
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("throw_distance_m"));
        let roundtrip: ProjectorThrowResult = serde_json::from_str(&json).unwrap();
        assert!((result.throw_distance_m - roundtrip.throw_distance_m).abs() < 1e-9);
    }
}
