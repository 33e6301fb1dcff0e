//! # Electrical Formulas
//!
//! Conductor loss, voltage drop, operating-temperature correction, and
//! diversity. Resistance is carried in mΩ/m throughout, matching the
//! conductor table; currents in amps, lengths in meters.
//!
//! ## Notation
//!
//! - `Ib` = design current (A)
//! - `In` = tabulated conductor rating (A)
//! - `r`  = conductor resistance per unit length (mΩ/m)
//! - `L`  = route length (m)
//! - `t`  = conductor temperature (°C)

/// Effective conductor operating temperature under partial load.
///
/// The conductor heats above ambient in proportion to the square of the
/// loading ratio, reaching its rated maximum at full load:
///
/// ```text
/// t_op = t_ambient + (t_max − t_ambient) × (Ib/In)²
/// ```
///
/// Loading beyond the rating clamps to `t_max` (the tabulated resistance is
/// not extrapolated upward). `Ib ≤ 0` or `In ≤ 0` returns `t_max`, which
/// makes the downstream correction factor exactly 1 (no correction).
#[inline]
pub fn operating_temperature_c(design_a: f64, rated_a: f64, ambient_c: f64, max_temp_c: f64) -> f64 {
    if design_a <= 0.0 || rated_a <= 0.0 {
        return max_temp_c;
    }
    let ratio = (design_a / rated_a).min(1.0);
    ambient_c + (max_temp_c - ambient_c) * ratio * ratio
}

/// Resistance-temperature correction factor for copper.
///
/// Tabulated voltage-drop resistances are quoted at the conductor's maximum
/// operating temperature; a conductor running cooler has proportionally
/// lower resistance:
///
/// ```text
/// Ct = (230 + t_op) / (230 + t_max)
/// ```
///
/// Returns 1.0 (base coefficient unmodified) when `Ib ≤ 0`, when `In ≤ 0`,
/// or when the conductor runs at its rated temperature.
#[inline]
pub fn temperature_correction_factor(
    design_a: f64,
    rated_a: f64,
    ambient_c: f64,
    max_temp_c: f64,
) -> f64 {
    let t_op = operating_temperature_c(design_a, rated_a, ambient_c, max_temp_c);
    (230.0 + t_op) / (230.0 + max_temp_c)
}

/// Diversity factor for branch circuits fed from a common trunk.
///
/// ```text
/// d = min(1, I_trunk / Σ I_branch)
/// ```
///
/// Not all branches peak simultaneously, so aggregate branch demand is
/// capped by what the trunk actually carries. Zero (or negative) total
/// branch demand returns 1.0: no diversity reduction is applicable.
#[inline]
pub fn diversity_factor(trunk_a: f64, branch_sum_a: f64) -> f64 {
    if branch_sum_a <= 0.0 {
        return 1.0;
    }
    (trunk_a / branch_sum_a).clamp(0.0, 1.0)
}

/// Three-phase conductor loss in watts.
///
/// ```text
/// P = 3 × I² × r × L / 1000
/// ```
///
/// with `I` in amps, `r` in mΩ/m, `L` in meters. The factor 3 accounts for
/// the three loaded line conductors; /1000 converts mΩ to Ω.
#[inline]
pub fn conductor_loss_three_phase_w(current_a: f64, resistance_mohm_per_m: f64, length_m: f64) -> f64 {
    3.0 * current_a * current_a * resistance_mohm_per_m * length_m / 1000.0
}

/// Voltage drop over a cable run in volts.
///
/// ```text
/// Vd = k × Ib × r × L / 1000
/// ```
///
/// where `k` is the circuit geometry factor: 2 for single-phase (line and
/// neutral), √3 for a balanced three-phase line-to-line drop.
#[inline]
pub fn voltage_drop_v(drop_factor: f64, current_a: f64, resistance_mohm_per_m: f64, length_m: f64) -> f64 {
    drop_factor * current_a * resistance_mohm_per_m * length_m / 1000.0
}

/// Express `value` as a percentage of `base`.
///
/// A zero or negative base resolves to the infinite sentinel rather than
/// NaN, so a malformed nominal voltage still renders as "∞ %".
#[inline]
pub fn percent_of(value: f64, base: f64) -> f64 {
    if base <= 0.0 {
        return f64::INFINITY;
    }
    value / base * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_temperature_full_load() {
        // at rated current the conductor reaches its rated temperature
        let t = operating_temperature_c(27.0, 27.0, 30.0, 70.0);
        assert!((t - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_operating_temperature_half_load() {
        // (0.5)² = 0.25 of the 40 K rise above 30 °C ambient
        let t = operating_temperature_c(13.5, 27.0, 30.0, 70.0);
        assert!((t - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_operating_temperature_overload_clamps() {
        let t = operating_temperature_c(54.0, 27.0, 30.0, 70.0);
        assert!((t - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_design_current_no_correction() {
        // Ib = 0 must leave the base coefficient unmodified
        let ct = temperature_correction_factor(0.0, 27.0, 30.0, 70.0);
        assert_eq!(ct, 1.0);
        let ct = temperature_correction_factor(-5.0, 27.0, 30.0, 70.0);
        assert_eq!(ct, 1.0);
    }

    #[test]
    fn test_correction_factor_below_one_when_lightly_loaded() {
        let ct = temperature_correction_factor(10.0, 27.0, 30.0, 70.0);
        assert!(ct < 1.0);
        // lower bound: conductor at ambient, (230+30)/(230+70)
        assert!(ct > 260.0 / 300.0);
    }

    #[test]
    fn test_diversity_factor_range() {
        assert_eq!(diversity_factor(100.0, 0.0), 1.0);
        assert_eq!(diversity_factor(100.0, 50.0), 1.0); // capped
        assert!((diversity_factor(100.0, 200.0) - 0.5).abs() < 1e-12);
        assert_eq!(diversity_factor(0.0, 200.0), 0.0);
    }

    #[test]
    fn test_three_phase_loss_worked_example() {
        // 100 A, 1.4 mΩ/m, 50 m -> 3 × 100² × 1.4 × 50 / 1000 = 2100 W
        let p = conductor_loss_three_phase_w(100.0, 1.4, 50.0);
        assert!((p - 2100.0).abs() < 1e-9);
    }

    #[test]
    fn test_voltage_drop_single_phase() {
        // 2 × 20 A × 7.41 mΩ/m × 25 m / 1000 = 7.41 V
        let vd = voltage_drop_v(2.0, 20.0, 7.41, 25.0);
        assert!((vd - 7.41).abs() < 1e-9);
    }

    #[test]
    fn test_percent_of_zero_base_sentinel() {
        assert!(percent_of(5.0, 0.0).is_infinite());
        assert!((percent_of(11.5, 230.0) - 5.0).abs() < 1e-12);
    }
}
