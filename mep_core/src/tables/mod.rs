//! # Reference Tables
//!
//! Embedded read-only reference data used by the calculators. Categorical
//! tables are keyed by exhaustive enums, so lookups are total by
//! construction; parsing a user-supplied string into one of those enums is
//! strict and returns `CalcError::UnknownKey` for unrecognized spellings.
//!
//! Numeric keys (conductor cross-sectional area) resolve to the nearest
//! tabulated standard size; the resolution rule is deterministic and shared
//! via [`nearest_index`].
//!
//! ## Modules
//!
//! - [`cable`] - Copper conductor sizes, resistance, and current ratings
//! - [`absorption`] - Sound absorption coefficients by material and band
//! - [`lighting`] - Lighting power density limits and required illuminance
//! - [`speakers`] - Loudspeaker sensitivity/power/dispersion presets
//! - [`drainage`] - Fixture unit values and drain pipe capacities

pub mod absorption;
pub mod cable;
pub mod drainage;
pub mod lighting;
pub mod speakers;

// Re-export commonly used types
pub use absorption::{FrequencyBand, SurfaceMaterial};
pub use cable::{ConductorData, Insulation, Phase, nearest_conductor, CONDUCTORS};
pub use drainage::{DrainType, FixtureKind, PipeCapacity, minimum_pipe, DRAIN_PIPES};
pub use lighting::SpaceType;
pub use speakers::{SpeakerModel, SpeakerPreset};

/// Index of the tabulated value numerically closest to `query`.
///
/// `sorted` must be non-empty and ascending. Equidistant queries resolve to
/// the smaller entry, so the rule is deterministic for values exactly
/// between two standard sizes.
///
/// # Example
///
/// ```rust
/// use mep_core::tables::nearest_index;
///
/// let sizes = [1.5, 2.5, 4.0];
/// assert_eq!(nearest_index(&sizes, 2.5), 1); // exact
/// assert_eq!(nearest_index(&sizes, 3.0), 1); // closer to 2.5
/// assert_eq!(nearest_index(&sizes, 3.25), 1); // tie resolves down
/// ```
pub fn nearest_index(sorted: &[f64], query: f64) -> usize {
    debug_assert!(!sorted.is_empty());
    let mut best = 0;
    let mut best_diff = f64::INFINITY;
    for (i, &v) in sorted.iter().enumerate() {
        let diff = (v - query).abs();
        // strict comparison keeps the earlier (smaller) entry on ties
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let sizes = [1.0, 1.5, 2.5, 4.0, 6.0];
        for (i, &s) in sizes.iter().enumerate() {
            assert_eq!(nearest_index(&sizes, s), i);
        }
    }

    #[test]
    fn test_between_resolves_to_closest() {
        let sizes = [1.5, 2.5, 4.0];
        assert_eq!(nearest_index(&sizes, 2.0), 0); // |1.5-2.0|=0.5 = |2.5-2.0| tie -> smaller
        assert_eq!(nearest_index(&sizes, 2.2), 1);
        assert_eq!(nearest_index(&sizes, 3.9), 2);
    }

    #[test]
    fn test_tie_resolves_to_smaller() {
        let sizes = [10.0, 16.0];
        assert_eq!(nearest_index(&sizes, 13.0), 0);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let sizes = [1.5, 2.5, 4.0];
        assert_eq!(nearest_index(&sizes, 0.1), 0);
        assert_eq!(nearest_index(&sizes, 500.0), 2);
    }
}
