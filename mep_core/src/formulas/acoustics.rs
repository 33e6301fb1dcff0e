//! # Acoustic Formulas
//!
//! Inverse-square sound propagation and Sabine reverberation.
//!
//! ## Notation
//!
//! - `S`  = speaker sensitivity at 1 W / 1 m (dB SPL)
//! - `P`  = electrical power delivered (W)
//! - `d`  = listener distance (m)
//! - `V`  = room volume (m³)
//! - `A`  = equivalent absorption area (m², metric sabins)

/// Sound pressure level at 1 m for a given drive power.
///
/// ```text
/// SPL@1m = S + 10 × log10(P)
/// ```
///
/// Doubling power adds 3 dB. `P ≤ 0` resolves to the negative-infinite
/// sentinel (no output), never NaN; calculators validate power upstream.
#[inline]
pub fn spl_at_one_meter(sensitivity_db: f64, power_w: f64) -> f64 {
    if power_w <= 0.0 {
        return f64::NEG_INFINITY;
    }
    sensitivity_db + 10.0 * power_w.log10()
}

/// Sound pressure level at a listener distance, inverse-square law.
///
/// ```text
/// SPL@d = SPL@ref − 20 × log10(d / d_ref)
/// ```
///
/// Each doubling of distance loses 6 dB. A distance at or inside the
/// reference point (`d ≤ 0` or `d_ref ≤ 0`) resolves to the infinite
/// sentinel, representing the level at the source itself.
#[inline]
pub fn spl_at_distance(spl_ref_db: f64, distance_m: f64, reference_m: f64) -> f64 {
    if distance_m <= 0.0 || reference_m <= 0.0 {
        return f64::INFINITY;
    }
    spl_ref_db - 20.0 * (distance_m / reference_m).log10()
}

/// Sabine reverberation time in seconds.
///
/// ```text
/// RT60 = 0.161 × V / A
/// ```
///
/// Zero (or negative) total absorption resolves to the infinite sentinel:
/// a perfectly hard room never decays 60 dB.
#[inline]
pub fn sabine_rt60(volume_m3: f64, absorption_m2: f64) -> f64 {
    if absorption_m2 <= 0.0 {
        return f64::INFINITY;
    }
    0.161 * volume_m3 / absorption_m2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spl_worked_example() {
        // 90 dB/W/m at 10 W -> 100 dB at 1 m
        let spl_1m = spl_at_one_meter(90.0, 10.0);
        assert!((spl_1m - 100.0).abs() < 1e-9);

        // 100 dB at 1 m -> 80 dB at 10 m
        let spl_10m = spl_at_distance(spl_1m, 10.0, 1.0);
        assert!((spl_10m - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_spl_one_watt_is_sensitivity() {
        assert_eq!(spl_at_one_meter(87.0, 1.0), 87.0);
    }

    #[test]
    fn test_spl_doubling_distance_loses_six_db() {
        let a = spl_at_distance(100.0, 2.0, 1.0);
        let b = spl_at_distance(100.0, 4.0, 1.0);
        assert!((a - b - 6.02).abs() < 0.01);
    }

    #[test]
    fn test_spl_degenerate_sentinels() {
        assert_eq!(spl_at_one_meter(90.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(spl_at_distance(100.0, 0.0, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_sabine_worked_example() {
        // 10 × 7 × 3 room, A = 33.81 m² -> RT60 = 0.161 × 210 / 33.81 ≈ 1.0 s
        let rt = sabine_rt60(210.0, 33.81);
        assert!((rt - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_sabine_zero_absorption_sentinel() {
        assert!(sabine_rt60(210.0, 0.0).is_infinite());
    }

    #[test]
    fn test_sabine_scales_linearly_with_volume() {
        let small = sabine_rt60(100.0, 20.0);
        let large = sabine_rt60(200.0, 20.0);
        assert!((large - 2.0 * small).abs() < 1e-12);
    }
}
