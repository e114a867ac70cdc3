//! Per-pixel operator kernels: a scalar reference implementation, the
//! non-separable HSL-luma kernels it depends on, and a SIMD lane-group
//! implementation checked against the scalar one.

pub mod nonseparable;
pub mod scalar;
pub mod vector;

pub use scalar::{RgbaF32, RgbaU16};
