//! # mep_core - MEP Engineering Calculation Engine
//!
//! `mep_core` is the computational heart of Mepcalc, providing building
//! services (electrical, audio-visual, plumbing) calculations behind a
//! clean, stateless API. All inputs and outputs are JSON-serializable, so
//! the same evaluators drive the CLI, a form UI, or a test harness.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every result carries an ordered calculation trace
//!
//! ## Quick Start
//!
//! ```rust
//! use mep_core::calculations::voltage_drop::{VoltageDropInput, CircuitUse, calculate};
//! use mep_core::tables::cable::{Insulation, Phase};
//!
//! let input = VoltageDropInput {
//!     label: "DB1-L3".to_string(),
//!     design_current_a: 20.0,
//!     route_length_m: 25.0,
//!     csa_mm2: 2.5,
//!     insulation: Insulation::Pvc,
//!     phase: Phase::SinglePhase,
//!     ambient_temp_c: 30.0,
//!     circuit_use: CircuitUse::Power,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Vd = {:.2} % ({})", result.voltage_drop_percent,
//!     if result.passes() { "PASS" } else { "FAIL" });
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and settings
//! - [`calculations`] - All calculator types (voltage drop, SPL, RT60, ...)
//! - [`tables`] - Embedded reference data (conductors, absorption, DFU, ...)
//! - [`formulas`] - Shared closed-form formula functions
//! - [`compliance`] - Pass/fail checks with explicit sense
//! - [`trace`] - Ordered calculation steps for audit display
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod compliance;
pub mod errors;
pub mod file_io;
pub mod formulas;
pub mod project;
pub mod tables;
pub mod trace;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome, Evaluate};
pub use compliance::{Compliance, LimitSense};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use trace::{CalcStep, CalcTrace};
