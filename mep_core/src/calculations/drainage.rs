//! # Drain Sizing Calculation
//!
//! Fixture-unit loading for a sanitary drain and the minimum pipe diameter
//! that serves it. The selected pipe is checked against the requirement
//! (minimum sense, on diameter); the requirement is the larger of the
//! capacity-table minimum and the largest single-fixture trap size on the
//! drain.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::drainage::{DrainSizingInput, FixtureCount, calculate};
//! use mep_core::tables::drainage::{DrainType, FixtureKind};
//!
//! let input = DrainSizingInput {
//!     label: "Toilet Core L2".to_string(),
//!     drain_type: DrainType::HorizontalBranch,
//!     fixtures: vec![
//!         FixtureCount { kind: FixtureKind::WaterCloset, count: 3 },
//!         FixtureCount { kind: FixtureKind::WashBasin, count: 3 },
//!         FixtureCount { kind: FixtureKind::Urinal, count: 2 },
//!     ],
//!     selected_diameter_mm: 100.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{} DFU needs {} mm", result.total_dfu, result.required_diameter_mm);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::tables::drainage::{minimum_pipe, DrainType, FixtureKind};
use crate::trace::CalcTrace;

/// A fixture kind and how many of them discharge to the drain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCount {
    /// Fixture kind
    pub kind: FixtureKind,

    /// Number installed
    pub count: u32,
}

/// Input parameters for a drain sizing check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Toilet Core L2",
///   "drain_type": "HorizontalBranch",
///   "fixtures": [
///     { "kind": "WaterCloset", "count": 3 },
///     { "kind": "WashBasin", "count": 3 }
///   ],
///   "selected_diameter_mm": 100.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrainSizingInput {
    /// User label for this drain
    pub label: String,

    /// Drain configuration (branch or stack)
    pub drain_type: DrainType,

    /// Fixture schedule discharging to the drain
    pub fixtures: Vec<FixtureCount>,

    /// Proposed pipe diameter (mm)
    pub selected_diameter_mm: f64,
}

impl DrainSizingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fixtures.is_empty() {
            return Err(CalcError::missing_field("fixtures"));
        }
        for (i, fixture) in self.fixtures.iter().enumerate() {
            if fixture.count == 0 {
                return Err(CalcError::invalid_input(
                    format!("fixtures[{i}].count"),
                    "0",
                    "Fixture count must be at least 1",
                ));
            }
        }
        if self.selected_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "selected_diameter_mm",
                self.selected_diameter_mm.to_string(),
                "Selected diameter must be positive",
            ));
        }
        Ok(())
    }

    /// Total drainage fixture units on the drain
    pub fn total_dfu(&self) -> f64 {
        self.fixtures
            .iter()
            .map(|f| f.kind.dfu() * f.count as f64)
            .sum()
    }
}

/// Results from a drain sizing check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrainSizingResult {
    /// Total fixture units (DFU)
    pub total_dfu: f64,

    /// Minimum diameter from the capacity table (mm)
    pub capacity_diameter_mm: f64,

    /// Largest single-fixture trap size on the drain (mm)
    pub governing_trap_mm: f64,

    /// Required diameter: max(capacity minimum, governing trap) (mm)
    pub required_diameter_mm: f64,

    /// Check of selected diameter against the requirement (minimum sense)
    pub compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl DrainSizingResult {
    /// Check if the selected pipe is large enough
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }
}

/// Total up fixture units, size the drain, and check the selected pipe.
///
/// A fixture load beyond the largest tabulated pipe is a hard
/// `CalculationFailed` error, not a silent extrapolation.
pub fn calculate(input: &DrainSizingInput) -> CalcResult<DrainSizingResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    let total = input.total_dfu();
    trace.step("Fixture units", "Σ count × DFU", total, "DFU");

    let pipe = minimum_pipe(total, input.drain_type)?;
    trace.step(
        "Capacity table minimum",
        format!(
            "smallest {} serving {total} DFU",
            input.drain_type.display_name().to_lowercase()
        ),
        pipe.diameter_mm,
        "mm",
    );

    // fixtures is non-empty after validation, so the fold has a seed
    let governing_trap = input
        .fixtures
        .iter()
        .map(|f| f.kind.min_trap_mm())
        .fold(0.0, f64::max);
    trace.step(
        "Governing trap size",
        "largest single-fixture trap",
        governing_trap,
        "mm",
    );

    let required = pipe.diameter_mm.max(governing_trap);
    trace.step(
        "Required diameter",
        format!("max({}, {governing_trap})", pipe.diameter_mm),
        required,
        "mm",
    );

    let compliance = Compliance::at_least(
        "Pipe diameter",
        input.selected_diameter_mm,
        required,
        "mm",
    );

    Ok(DrainSizingResult {
        total_dfu: total,
        capacity_diameter_mm: pipe.diameter_mm,
        governing_trap_mm: governing_trap,
        required_diameter_mm: required,
        compliance,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_core() -> DrainSizingInput {
        DrainSizingInput {
            label: "Test Core".to_string(),
            drain_type: DrainType::HorizontalBranch,
            fixtures: vec![
                FixtureCount { kind: FixtureKind::WaterCloset, count: 3 },
                FixtureCount { kind: FixtureKind::WashBasin, count: 3 },
                FixtureCount { kind: FixtureKind::Urinal, count: 2 },
            ],
            selected_diameter_mm: 100.0,
        }
    }

    #[test]
    fn test_total_dfu() {
        // 3×4 + 3×1 + 2×2 = 19 DFU
        assert!((test_core().total_dfu() - 19.0).abs() < 1e-12);
    }

    #[test]
    fn test_required_diameter() {
        let result = calculate(&test_core()).unwrap();
        // 19 DFU on a branch: 80 mm carries 20 -> capacity minimum 80 mm,
        // but a WC needs an 80 mm trap anyway
        assert_eq!(result.capacity_diameter_mm, 80.0);
        assert_eq!(result.governing_trap_mm, 80.0);
        assert_eq!(result.required_diameter_mm, 80.0);
        assert!(result.passes());
    }

    #[test]
    fn test_trap_governs_over_capacity() {
        // a single WC is only 4 DFU (50 mm by capacity) but needs 80 mm
        let input = DrainSizingInput {
            label: "Single WC".to_string(),
            drain_type: DrainType::HorizontalBranch,
            fixtures: vec![FixtureCount { kind: FixtureKind::WaterCloset, count: 1 }],
            selected_diameter_mm: 80.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.capacity_diameter_mm, 50.0);
        assert_eq!(result.required_diameter_mm, 80.0);
        assert!(result.passes());
    }

    #[test]
    fn test_undersized_pipe_fails() {
        let mut input = test_core();
        input.selected_diameter_mm = 65.0;
        let result = calculate(&input).unwrap();
        assert!(!result.passes());
    }

    #[test]
    fn test_stack_allows_smaller_pipe() {
        let mut input = test_core();
        input.drain_type = DrainType::Stack;
        let result = calculate(&input).unwrap();
        // 19 DFU on a stack: 65 mm carries 20, but the WC trap governs
        assert_eq!(result.capacity_diameter_mm, 65.0);
        assert_eq!(result.required_diameter_mm, 80.0);
    }

    #[test]
    fn test_overload_is_hard_error() {
        let input = DrainSizingInput {
            label: "Tower".to_string(),
            drain_type: DrainType::HorizontalBranch,
            fixtures: vec![FixtureCount { kind: FixtureKind::WaterCloset, count: 400 }],
            selected_diameter_mm: 200.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let mut input = test_core();
        input.fixtures.clear();
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut input = test_core();
        input.fixtures[0].count = 0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_core();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: DrainSizingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.fixtures, roundtrip.fixtures);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("required_diameter_mm"));
        let roundtrip: DrainSizingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.required_diameter_mm, roundtrip.required_diameter_mm);
    }
}
