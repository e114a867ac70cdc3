//! Lane-group vector primitives for the compositor kernels.
//!
//! The lane count `L` is a build-time constant floored at 8 rather than an
//! arbitrary-width probe; this workspace pins `L = 8` rather than probing
//! the target at build time, since `wide` itself already dispatches to the
//! best ISA available for an `f32x8`/`u16x8` at compile time.
//!
//! Elementwise arithmetic goes through `wide`: build a vector with
//! `from`/`splat`, operate, `to_array()` back out. The piecewise operator
//! kernels (overlay,
//! hard_light, color_dodge, color_burn, soft_light) need a per-lane
//! branch; rather than lean on `wide`'s comparison-mask API for that,
//! [`select_f32`] and [`select_u16`] do it lane-by-lane in plain Rust,
//! which keeps the masked-blend logic easy to read against the scalar
//! reference kernel it must match: every operator has a scalar reference
//! implementation used as a correctness oracle for its vector counterpart.

use wide::f32x8;

/// The SIMD lane width used throughout the compositor.
pub const LANES: usize = 8;

/// A lane group of `f32` channel values, e.g. one channel's worth of 8
/// pixels' premultiplied values in float precision.
pub type LaneF32 = [f32; LANES];

/// A lane group of widened `u16` channel values (integer precision).
pub type LaneU16 = [u16; LANES];

/// Clamps every lane to `[0, 1]`.
#[inline]
pub fn clamp01_f32(v: LaneF32) -> LaneF32 {
    let vv = f32x8::from(v);
    let zero = f32x8::splat(0.0);
    let one = f32x8::splat(1.0);
    vv.max(zero).min(one).to_array()
}

/// Lane-wise `a * (1 - t) + b * t`.
#[inline]
pub fn lerp_f32(a: LaneF32, b: LaneF32, t: LaneF32) -> LaneF32 {
    let va = f32x8::from(a);
    let vb = f32x8::from(b);
    let vt = f32x8::from(t);
    let one = f32x8::splat(1.0);
    (va * (one - vt) + vb * vt).to_array()
}

/// Lane-wise minimum.
#[inline]
pub fn min_f32(a: LaneF32, b: LaneF32) -> LaneF32 {
    (f32x8::from(a).min(f32x8::from(b))).to_array()
}

/// Lane-wise maximum.
#[inline]
pub fn max_f32(a: LaneF32, b: LaneF32) -> LaneF32 {
    (f32x8::from(a).max(f32x8::from(b))).to_array()
}

/// Lane-wise multiply.
#[inline]
pub fn mul_f32(a: LaneF32, b: LaneF32) -> LaneF32 {
    (f32x8::from(a) * f32x8::from(b)).to_array()
}

/// Lane-wise `1 - x`.
#[inline]
pub fn inv_f32(v: LaneF32) -> LaneF32 {
    (f32x8::splat(1.0) - f32x8::from(v)).to_array()
}

/// Lane-wise square root.
#[inline]
pub fn sqrt_f32(v: LaneF32) -> LaneF32 {
    f32x8::from(v).sqrt().to_array()
}

/// Per-lane `if cond[i] { t[i] } else { f[i] }`, used for the piecewise
/// and non-separable kernels' branchy formulas.
#[inline]
pub fn select_f32(cond: [bool; LANES], t: LaneF32, f: LaneF32) -> LaneF32 {
    std::array::from_fn(|i| if cond[i] { t[i] } else { f[i] })
}

/// Lane-wise `(a * b) / 255` with truncated integer division, the
/// integer-precision `mul(x, y)` helper used by the compositing kernels.
#[inline]
pub fn mul_div_255_u16(a: LaneU16, b: LaneU16) -> LaneU16 {
    std::array::from_fn(|i| (a[i] as u32 * b[i] as u32 / 255) as u16)
}

/// Lane-wise `255 - x`, the integer-precision `inv(x)` helper used by the
/// compositing kernels.
#[inline]
pub fn inv_u16(v: LaneU16) -> LaneU16 {
    std::array::from_fn(|i| 255 - v[i])
}

/// Lane-wise minimum, integer precision.
#[inline]
pub fn min_u16(a: LaneU16, b: LaneU16) -> LaneU16 {
    std::array::from_fn(|i| a[i].min(b[i]))
}

/// Lane-wise maximum, integer precision.
#[inline]
pub fn max_u16(a: LaneU16, b: LaneU16) -> LaneU16 {
    std::array::from_fn(|i| a[i].max(b[i]))
}

/// Lane-wise saturating add clamped to `max_channel` (used by `plus`).
#[inline]
pub fn add_sat_u16(a: LaneU16, b: LaneU16, max_channel: u16) -> LaneU16 {
    std::array::from_fn(|i| (a[i] + b[i]).min(max_channel))
}

/// Per-lane select for integer-precision branchy kernels.
#[inline]
pub fn select_u16(cond: [bool; LANES], t: LaneU16, f: LaneU16) -> LaneU16 {
    std::array::from_fn(|i| if cond[i] { t[i] } else { f[i] })
}
