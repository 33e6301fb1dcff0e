//! # Geometric Formulas
//!
//! Coverage and projection geometry for distributed audio and display
//! design.

/// Coverage radius of a ceiling speaker at the listening plane.
///
/// The speaker's conical dispersion intersects the listening plane a
/// vertical distance `h` below it:
///
/// ```text
/// r = h × tan(θ / 2)
/// ```
///
/// A dispersion of exactly 180° (or more) means the half-angle tangent is
/// unbounded; this resolves to the explicit infinite-coverage sentinel,
/// never a runtime error. A non-positive height resolves to zero coverage.
#[inline]
pub fn coverage_radius_m(height_m: f64, dispersion_deg: f64) -> f64 {
    if height_m <= 0.0 {
        return 0.0;
    }
    if dispersion_deg >= 180.0 {
        return f64::INFINITY;
    }
    height_m * (dispersion_deg / 2.0).to_radians().tan()
}

/// Speakers required to cover a floor area with circles of radius `r`.
///
/// Edge-to-edge layout: each unit covers `π r²`. Infinite radius covers any
/// area with a single unit; zero radius cannot cover a positive area and
/// resolves to the infinite sentinel for the caller to surface.
#[inline]
pub fn speakers_for_area(area_m2: f64, radius_m: f64) -> f64 {
    if area_m2 <= 0.0 {
        return 0.0;
    }
    if radius_m.is_infinite() {
        return 1.0;
    }
    if radius_m <= 0.0 {
        return f64::INFINITY;
    }
    (area_m2 / (std::f64::consts::PI * radius_m * radius_m)).ceil()
}

/// Screen width and height from its diagonal and aspect ratio.
///
/// ```text
/// w = diag × aw / √(aw² + ah²)
/// h = diag × ah / √(aw² + ah²)
/// ```
///
/// Returns `(width, height)` in the diagonal's unit. Degenerate aspect
/// terms (both zero) resolve to a zero-size screen rather than NaN.
#[inline]
pub fn screen_dimensions_m(diagonal_m: f64, aspect_w: f64, aspect_h: f64) -> (f64, f64) {
    let hyp = (aspect_w * aspect_w + aspect_h * aspect_h).sqrt();
    if hyp <= 0.0 {
        return (0.0, 0.0);
    }
    (diagonal_m * aspect_w / hyp, diagonal_m * aspect_h / hyp)
}

/// Projector throw distance for a lens ratio and screen width.
///
/// ```text
/// d = throw_ratio × w
/// ```
#[inline]
pub fn throw_distance_m(throw_ratio: f64, screen_width_m: f64) -> f64 {
    throw_ratio * screen_width_m
}
