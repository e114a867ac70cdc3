//! Conic (angular sweep) gradient projection.

use raster_math::Vec2;
use std::f32::consts::TAU;

/// Normalizes an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Computes the offset of point `p` around `center`, starting at
/// `start_angle` (already normalized into `[0, 2π)`) and sweeping clockwise.
pub fn offset(center: Vec2, start_angle: f32, p: Vec2) -> f32 {
    let d = p - center;
    let angle = d.y.atan2(d.x) - start_angle;
    normalize_angle(angle) / TAU
}
