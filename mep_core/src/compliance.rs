//! # Compliance Checks
//!
//! Pass/fail evaluation of a computed value against a category-dependent
//! limit. The sense of the check is explicit: loss/overage style metrics
//! (voltage drop, lighting power density, reverberation time) pass when the
//! value is at or below the limit; adequacy style metrics (illuminance,
//! sound pressure level, pipe diameter) pass when the value is at or above
//! the minimum required.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::compliance::Compliance;
//!
//! let vd = Compliance::at_most("Voltage drop", 2.7, 5.0, "%");
//! assert!(vd.passes);
//!
//! let lux = Compliance::at_least("Average illuminance", 320.0, 500.0, "lx");
//! assert!(!lux.passes);
//! ```

use serde::{Deserialize, Serialize};

/// Direction of a compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitSense {
    /// Value must not exceed the limit (loss/overage metrics)
    Maximum,
    /// Value must meet or exceed the limit (adequacy metrics)
    Minimum,
}

/// Result of checking a computed value against a limit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Voltage drop",
///   "value": 2.7,
///   "limit": 5.0,
///   "sense": "Maximum",
///   "unit": "%",
///   "passes": true,
///   "margin": 2.3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compliance {
    /// What is being checked (e.g., "Voltage drop")
    pub label: String,

    /// Computed value
    pub value: f64,

    /// Category-derived limit the value is checked against
    pub limit: f64,

    /// Direction of the check
    pub sense: LimitSense,

    /// Unit string shared by value and limit
    pub unit: String,

    /// True if the check passes
    pub passes: bool,

    /// Headroom in the passing direction (negative when failing)
    pub margin: f64,
}

impl Compliance {
    /// Check a loss/overage metric: passes when `value <= limit`.
    pub fn at_most(label: impl Into<String>, value: f64, limit: f64, unit: impl Into<String>) -> Self {
        Compliance {
            label: label.into(),
            value,
            limit,
            sense: LimitSense::Maximum,
            unit: unit.into(),
            passes: value <= limit,
            margin: limit - value,
        }
    }

    /// Check an adequacy metric: passes when `value >= limit`.
    pub fn at_least(label: impl Into<String>, value: f64, limit: f64, unit: impl Into<String>) -> Self {
        Compliance {
            label: label.into(),
            value,
            limit,
            sense: LimitSense::Minimum,
            unit: unit.into(),
            passes: value >= limit,
            margin: value - limit,
        }
    }

    /// Utilization of the limit as a unity-style ratio.
    ///
    /// For `Maximum` checks this is `value / limit` (≤ 1.0 passes); for
    /// `Minimum` checks it is `limit / value` so the passing direction is
    /// the same. An infinite computed value utilizes a `Minimum` limit
    /// fully (returns 0.0) and fails a `Maximum` limit (returns infinity).
    pub fn utilization(&self) -> f64 {
        match self.sense {
            LimitSense::Maximum => {
                if self.limit > 0.0 {
                    self.value / self.limit
                } else {
                    f64::INFINITY
                }
            }
            LimitSense::Minimum => {
                if self.value > 0.0 {
                    self.limit / self.value
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_most_sense() {
        assert!(Compliance::at_most("vd", 3.0, 5.0, "%").passes);
        assert!(Compliance::at_most("vd", 5.0, 5.0, "%").passes);
        assert!(!Compliance::at_most("vd", 5.1, 5.0, "%").passes);
    }

    #[test]
    fn test_at_least_sense() {
        assert!(Compliance::at_least("lux", 520.0, 500.0, "lx").passes);
        assert!(Compliance::at_least("lux", 500.0, 500.0, "lx").passes);
        assert!(!Compliance::at_least("lux", 499.0, 500.0, "lx").passes);
    }

    #[test]
    fn test_margin_signs() {
        let pass = Compliance::at_most("w", 8.0, 11.0, "W/m²");
        assert!(pass.margin > 0.0);
        let fail = Compliance::at_least("spl", 72.0, 75.0, "dB");
        assert!(fail.margin < 0.0);
    }

    #[test]
    fn test_utilization() {
        let c = Compliance::at_most("vd", 2.5, 5.0, "%");
        assert!((c.utilization() - 0.5).abs() < 1e-12);

        let c = Compliance::at_least("lux", 1000.0, 500.0, "lx");
        assert!((c.utilization() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_infinite_value() {
        // Infinite reverberation time fails a maximum-sense target
        let c = Compliance::at_most("rt60", f64::INFINITY, 1.0, "s");
        assert!(!c.passes);
        assert!(c.utilization().is_infinite());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let c = Compliance::at_least("Average illuminance", 480.0, 500.0, "lx");
        let json = serde_json::to_string(&c).unwrap();
        let roundtrip: Compliance = serde_json::from_str(&json).unwrap();
        assert_eq!(c, roundtrip);
    }
}
