/// Mathematical utility functions shared by the derivation and
/// aggregation steps.

/// Round a value to a fixed number of decimal places.
///
/// # Arguments
/// * `value` - The value to round
/// * `places` - Number of decimal places to keep
///
/// # Examples
/// ```
/// use battery_cell_analyzer::math_utils::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(29.96, 1), 30.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Clamp a percentage into [0, 100] before it is used as a display fraction.
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
