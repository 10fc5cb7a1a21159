//! Utilities for 2D vector math.

use nalgebra::Vector2;

/// Computes the unsigned angle between two vectors, in range `[0, π]`.
///
/// If either vector has zero magnitude the angle is undefined and NaN is returned (unlike
/// [`Vector2::angle`], which clamps such input to 0). Callers compare the result against
/// thresholds, and comparisons against NaN evaluate to `false`, so degenerate geometry degrades
/// into the "no match" branch instead of producing a bogus pose.
pub fn angle_between(a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    (a.dot(&b) / (a.magnitude() * b.magnitude())).acos()
}
