//! # Calculation Trace
//!
//! Ordered audit steps recorded by every evaluator. Each step couples a
//! human-readable description, the formula as applied (with substituted
//! values where helpful), the resulting number, and its unit. Front ends
//! render the trace directly; report generators consume it unchanged.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::trace::CalcTrace;
//!
//! let mut trace = CalcTrace::new();
//! trace.step("Trunk conductor loss", "3 × 100² × 1.4 × 50 / 1000", 2100.0, "W");
//! assert_eq!(trace.steps().len(), 1);
//! assert_eq!(trace.steps()[0].value, 2100.0);
//! ```

use serde::{Deserialize, Serialize};

/// One entry in a calculation trace.
///
/// ## JSON Example
///
/// ```json
/// {
///   "description": "Voltage drop",
///   "formula": "mV/A/m × Ib × L / 1000",
///   "value": 6.16,
///   "unit": "V"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcStep {
    /// What this step computes (e.g., "Diversity factor")
    pub description: String,

    /// The formula as applied, human-readable
    pub formula: String,

    /// Resulting numeric value
    ///
    /// Degenerate arithmetic is recorded as an explicit sentinel
    /// (`f64::INFINITY`), never NaN.
    pub value: f64,

    /// Unit string for display (e.g., "W", "dB", "s"); empty for ratios
    pub unit: String,
}

/// Ordered list of calculation steps, in the order they were performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalcTrace {
    steps: Vec<CalcStep>,
}

impl CalcTrace {
    /// Create an empty trace
    pub fn new() -> Self {
        CalcTrace { steps: Vec::new() }
    }

    /// Append a step and return the value unchanged, so computations can be
    /// traced inline: `let vd = trace.step("Voltage drop", ..., vd, "V");`
    pub fn step(
        &mut self,
        description: impl Into<String>,
        formula: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> f64 {
        self.steps.push(CalcStep {
            description: description.into(),
            formula: formula.into(),
            value,
            unit: unit.into(),
        });
        value
    }

    /// All steps in evaluation order
    pub fn steps(&self) -> &[CalcStep] {
        &self.steps
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no steps were recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_returns_value() {
        let mut trace = CalcTrace::new();
        let v = trace.step("Area", "10 × 7", 70.0, "m²");
        assert_eq!(v, 70.0);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let mut trace = CalcTrace::new();
        trace.step("first", "1", 1.0, "");
        trace.step("second", "2", 2.0, "");
        trace.step("third", "3", 3.0, "");
        let descriptions: Vec<&str> = trace.steps().iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let mut trace = CalcTrace::new();
        trace.step("RT60 at 500 Hz", "0.161 × 210 / 33.8", 1.0, "s");
        let json = serde_json::to_string(&trace).unwrap();
        // Serializes as a bare array of steps
        assert!(json.starts_with('['));
        let roundtrip: CalcTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, roundtrip);
    }

    #[test]
    fn test_infinite_sentinel_allowed() {
        let mut trace = CalcTrace::new();
        trace.step("Coverage radius", "h × tan(90°)", f64::INFINITY, "m");
        assert!(trace.steps()[0].value.is_infinite());
    }
}
