//! Transpose between interleaved pixel memory (a [`StrideView`]/[`StrideMut`])
//! and the planar (struct-of-arrays) lane groups the kernels in
//! [`crate::kernel`] operate on.
//!
//! A lane group always has [`raster_math::LANES`] slots; for a tail group
//! shorter than that, the unused slots are zero-filled on load and simply
//! never written back on store - no masked load/store instructions are
//! needed since this is a plain Rust loop, not raw SIMD, and a byte-wise
//! fallback keeps the tail case simple.

use raster_core::{Pixel, StrideMut, StrideView};
use raster_math::{round_to_u8, LANES};

use crate::kernel::vector::{RgbaLaneF32, RgbaLaneU16};

/// Reads up to `LANES` pixels starting at `start` out of `stride`, widening
/// each premultiplied channel to `u16`. Slots `count..LANES` are zeroed.
pub fn load_u16(stride: &StrideView, start: usize, count: usize) -> RgbaLaneU16 {
    let mut out: RgbaLaneU16 = [[0; LANES]; 4];
    for lane in 0..count {
        let Pixel::Rgba { r, g, b, a } = stride.get(start + lane).to_rgba() else {
            unreachable!("to_rgba always returns Rgba")
        };
        out[0][lane] = r as u16;
        out[1][lane] = g as u16;
        out[2][lane] = b as u16;
        out[3][lane] = a as u16;
    }
    out
}

/// Writes `count` lanes of `lanes` back into `stride` starting at `start`,
/// narrowing each channel to `u8` (kernels keep values in `0..=255`).
pub fn store_u16(stride: &mut StrideMut, start: usize, count: usize, lanes: RgbaLaneU16) {
    for lane in 0..count {
        let pixel = Pixel::rgba(
            lanes[0][lane] as u8,
            lanes[1][lane] as u8,
            lanes[2][lane] as u8,
            lanes[3][lane] as u8,
        );
        stride.set(start + lane, pixel);
    }
}

/// Reads up to `LANES` pixels, decoding premultiplied channels to `f32` in
/// `[0, 1]`. Slots `count..LANES` are zeroed.
pub fn load_f32(stride: &StrideView, start: usize, count: usize) -> RgbaLaneF32 {
    let mut out: RgbaLaneF32 = [[0.0; LANES]; 4];
    for lane in 0..count {
        let Pixel::Rgba { r, g, b, a } = stride.get(start + lane).to_rgba() else {
            unreachable!("to_rgba always returns Rgba")
        };
        out[0][lane] = r as f32 / 255.0;
        out[1][lane] = g as f32 / 255.0;
        out[2][lane] = b as f32 / 255.0;
        out[3][lane] = a as f32 / 255.0;
    }
    out
}

/// Writes `count` lanes back into `stride`, re-encoding with
/// [`round_to_u8`] (round-half-away-from-zero).
pub fn store_f32(stride: &mut StrideMut, start: usize, count: usize, lanes: RgbaLaneF32) {
    for lane in 0..count {
        let pixel = Pixel::rgba(
            round_to_u8(lanes[0][lane]),
            round_to_u8(lanes[1][lane]),
            round_to_u8(lanes[2][lane]),
            round_to_u8(lanes[3][lane]),
        );
        stride.set(start + lane, pixel);
    }
}
