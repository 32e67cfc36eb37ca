//! Shared angular utilities.

/// Normalize an angle to [0, 360) degrees.
///
/// Used by every sidereal conversion in the workspace; must be exact at
/// the wrap so that 360.0 maps to 0.0 and negative angles land strictly
/// inside the range.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
