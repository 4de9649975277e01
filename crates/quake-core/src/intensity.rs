//! Empirical intensity attenuation.

/// Lowest reportable intensity degree.
pub const MIN_INTENSITY: u8 = 0;
/// Highest reportable intensity degree.
pub const MAX_INTENSITY: u8 = 12;

/// Unrounded attenuation value for a magnitude at a distance in kilometers.
pub fn raw_intensity(magnitude: f64, distance_km: f64) -> f64 {
    6.5953 + 1.3467 * magnitude - 4.5952 * (distance_km + 26.0).log10()
}

/// Estimated intensity degree, rounded to nearest (half away from zero) and
/// clamped to `[0, 12]`.
///
/// `distance_km` must be non-negative. A NaN result (from a NaN input)
/// clamps to 0.
pub fn intensity_degree(magnitude: f64, distance_km: f64) -> u8 {
    let rounded = raw_intensity(magnitude, distance_km).round();
    if rounded.is_nan() || rounded <= f64::from(MIN_INTENSITY) {
        MIN_INTENSITY
    } else if rounded >= f64::from(MAX_INTENSITY) {
        MAX_INTENSITY
    } else {
        rounded as u8
    }
}
