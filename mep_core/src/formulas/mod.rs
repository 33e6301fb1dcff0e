//! # Engineering Formulas
//!
//! Closed-form formulas shared by the calculators, kept in one place so
//! each can be verified against its published source independently of the
//! input/validation plumbing around it.
//!
//! ## Modules
//!
//! - [`electrical`] - Conductor loss, voltage drop, temperature correction,
//!   diversity
//! - [`acoustics`] - Inverse-square SPL and Sabine reverberation
//! - [`geometry`] - Coverage radius, screen geometry, throw distance
//!
//! ## Degenerate Inputs
//!
//! Formula functions never panic and never return NaN for the degenerate
//! cases called out in their docs: division by zero, log of zero, and
//! tangent at 90° all resolve to explicit sentinel values (`f64::INFINITY`
//! or a documented fixed value). Rejecting nonsensical input (negative
//! lengths, zero power) is the calculators' validation responsibility, not
//! the formulas'.
//!
//! ## References
//!
//! - IEC 60287 / BS 7671 Appendix 4: conductor operating temperature and
//!   voltage drop
//! - Sabine, *Collected Papers on Acoustics*: reverberation
//! - ISO 3382: reverberation measurement bands

pub mod acoustics;
pub mod electrical;
pub mod geometry;

// Re-export commonly used items
pub use acoustics::{sabine_rt60, spl_at_distance, spl_at_one_meter};
pub use electrical::{
    conductor_loss_three_phase_w, diversity_factor, operating_temperature_c, percent_of,
    temperature_correction_factor, voltage_drop_v,
};
pub use geometry::{
    coverage_radius_m, screen_dimensions_m, speakers_for_area, throw_distance_m,
};
