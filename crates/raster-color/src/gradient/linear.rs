//! Linear gradient projection: offset is the fraction of `p`'s projection
//! onto the `start -> end` axis.

use raster_math::Vec2;

/// Returns the offset of `p` along the `start -> end` axis, or `-1.0` if
/// `start == end` (zero-length axis, an invalid gradient).
pub fn offset(start: Vec2, end: Vec2, p: Vec2) -> f32 {
    let axis = end - start;
    let denom = axis.dot(axis);
    if denom == 0.0 {
        return -1.0;
    }
    (axis.dot(p - start) / denom).clamp(0.0, 1.0)
}
