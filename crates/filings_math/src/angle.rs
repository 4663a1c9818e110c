//! Degree-based angle helpers
//!
//! Orientations are stored in degrees and are allowed to grow without
//! bound; only their trigonometric use matters. Differences between angles
//! are folded into `(-180, 180]` before use.

use crate::Vec2;

/// Fold an angle difference into `(-180, 180]`
///
/// Takes the remainder modulo 360 (sign follows the input), then corrects
/// once in either direction.
#[inline]
pub fn normalize_180(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Bearing of a displacement in degrees, `atan2(dy, dx)`
///
/// Zero points along +x, values lie in `[-180, 180]`.
#[inline]
pub fn bearing_degrees(delta: Vec2) -> f64 {
    delta.y.atan2(delta.x).to_degrees()
}

/// Unit direction for an orientation in degrees
///
/// Orientation 0 points "up" (negative y): `(sin θ, -cos θ)`.
#[inline]
pub fn heading(degrees: f64) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(s, -c)
}
