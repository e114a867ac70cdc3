//! The stride compositor: executes a batch of [`Operation`]s against
//! one destination [`StrideMut`], one lane group at a time.

use raster_core::{Pixel, StrideMut, StrideView};
use raster_math::LANES;

use crate::kernel::vector::{self, RgbaLaneF32, RgbaLaneU16};
use crate::operator::{Operator, Precision};
use crate::transpose;

/// A per-pixel dither pattern collaborator.
///
/// Dither patterns beyond their interface are out of scope here: this
/// crate defines the contract a dither pattern must satisfy to plug into a
/// stride/surface compositor call, but ships no concrete pattern
/// (ordered/blue-noise/etc.) implementation.
pub trait DitherPattern: Sync {
    /// Samples this pattern at absolute surface coordinate `(x, y)`.
    fn sample(&self, x: u32, y: u32) -> Pixel;
}

/// One parameter to an [`Operation`]: where a `dst` or `src` value for the
/// operator comes from.
pub enum Param<'a> {
    /// Reuse the current working value (first operation: the destination's
    /// existing contents; later operations: the previous operation's
    /// result, or for `src`, the previous operation's `src`).
    None,
    /// Broadcast a single pixel across the lane group.
    Pixel(Pixel),
    /// Read from a borrowed stride (must cover at least the destination's
    /// length; excess is ignored).
    Stride(StrideView<'a>),
    /// Evaluate a gradient per-column at `(x0 + i, y0)`.
    Gradient(&'a raster_color::Gradient, u32, u32),
    /// Evaluate a dither pattern per-column at `(x0 + i, y0)`.
    Dither(&'a dyn DitherPattern, u32, u32),
}

/// One step of a stride-compositor batch: an operator plus its destination
/// and source parameters.
pub struct Operation<'a> {
    /// The blend/composite operator this step applies.
    pub operator: Operator,
    /// Where this step's destination operand comes from.
    pub dst: Param<'a>,
    /// Where this step's source operand comes from.
    pub src: Param<'a>,
}

impl<'a> Operation<'a> {
    /// Builds an operation.
    pub fn new(operator: Operator, dst: Param<'a>, src: Param<'a>) -> Self {
        Self { operator, dst, src }
    }
}

/// Runs `ops` against `dst` in the given `precision`.
///
/// A zero-length `dst` is a no-op. The first operation's `src` being
/// [`Param::None`] is a precondition violation and is only checked in
/// debug builds.
pub fn composite(dst: &mut StrideMut, ops: &[Operation], precision: Precision) {
    let n = dst.len();
    if n == 0 || ops.is_empty() {
        return;
    }
    debug_assert!(
        !matches!(ops[0].src, Param::None),
        "stride compositor: first operation's source must not be Param::None"
    );

    let full_groups = n / LANES;
    for i in 0..full_groups {
        run_lane_group(dst, ops, precision, i * LANES, LANES);
    }
    let tail = n % LANES;
    if tail != 0 {
        run_lane_group(dst, ops, precision, full_groups * LANES, tail);
    }
}

fn run_lane_group(dst: &mut StrideMut, ops: &[Operation], precision: Precision, start: usize, count: usize) {
    match precision {
        Precision::Integer => run_lane_group_u16(dst, ops, start, count),
        Precision::Float => run_lane_group_f32(dst, ops, start, count),
    }
}

fn run_lane_group_u16(dst: &mut StrideMut, ops: &[Operation], start: usize, count: usize) {
    let mut working: Option<RgbaLaneU16> = None;
    let mut last_src: Option<RgbaLaneU16> = None;

    for op in ops {
        let src_lanes = match &op.src {
            Param::None => last_src.expect("stride compositor: src = None on the first operation"),
            Param::Pixel(p) => broadcast_u16(*p),
            Param::Stride(s) => transpose::load_u16(s, start, count),
            Param::Gradient(g, x0, y0) => eval_gradient_u16(g, *x0, *y0, start, count),
            Param::Dither(d, x0, y0) => eval_dither_u16(*d, *x0, *y0, start, count),
        };
        let dst_lanes = match &op.dst {
            Param::None => working.unwrap_or_else(|| transpose::load_u16(&dst.as_view(), start, count)),
            Param::Pixel(p) => broadcast_u16(*p),
            Param::Stride(s) => transpose::load_u16(s, start, count),
            Param::Gradient(g, x0, y0) => eval_gradient_u16(g, *x0, *y0, start, count),
            Param::Dither(d, x0, y0) => eval_dither_u16(*d, *x0, *y0, start, count),
        };
        working = Some(vector::apply_u16(op.operator, dst_lanes, src_lanes));
        last_src = Some(src_lanes);
    }

    if let Some(w) = working {
        transpose::store_u16(dst, start, count, w);
    }
}

fn run_lane_group_f32(dst: &mut StrideMut, ops: &[Operation], start: usize, count: usize) {
    let mut working: Option<RgbaLaneF32> = None;
    let mut last_src: Option<RgbaLaneF32> = None;

    for op in ops {
        let src_lanes = match &op.src {
            Param::None => last_src.expect("stride compositor: src = None on the first operation"),
            Param::Pixel(p) => broadcast_f32(*p),
            Param::Stride(s) => transpose::load_f32(s, start, count),
            Param::Gradient(g, x0, y0) => eval_gradient_f32(g, *x0, *y0, start, count),
            Param::Dither(d, x0, y0) => eval_dither_f32(*d, *x0, *y0, start, count),
        };
        let dst_lanes = match &op.dst {
            Param::None => working.unwrap_or_else(|| transpose::load_f32(&dst.as_view(), start, count)),
            Param::Pixel(p) => broadcast_f32(*p),
            Param::Stride(s) => transpose::load_f32(s, start, count),
            Param::Gradient(g, x0, y0) => eval_gradient_f32(g, *x0, *y0, start, count),
            Param::Dither(d, x0, y0) => eval_dither_f32(*d, *x0, *y0, start, count),
        };
        working = Some(vector::apply_f32(op.operator, dst_lanes, src_lanes));
        last_src = Some(src_lanes);
    }

    if let Some(w) = working {
        transpose::store_f32(dst, start, count, w);
    }
}

fn broadcast_u16(p: Pixel) -> RgbaLaneU16 {
    let Pixel::Rgba { r, g, b, a } = p.to_rgba() else { unreachable!() };
    [[r as u16; LANES], [g as u16; LANES], [b as u16; LANES], [a as u16; LANES]]
}

fn broadcast_f32(p: Pixel) -> RgbaLaneF32 {
    let Pixel::Rgba { r, g, b, a } = p.to_rgba() else { unreachable!() };
    [
        [r as f32 / 255.0; LANES],
        [g as f32 / 255.0; LANES],
        [b as f32 / 255.0; LANES],
        [a as f32 / 255.0; LANES],
    ]
}

fn eval_gradient_u16(gradient: &raster_color::Gradient, x0: u32, y0: u32, start: usize, count: usize) -> RgbaLaneU16 {
    let mut out: RgbaLaneU16 = [[0; LANES]; 4];
    for lane in 0..count {
        let Pixel::Rgba { r, g, b, a } = gradient.get_pixel(x0 + (start + lane) as u32, y0) else {
            unreachable!()
        };
        out[0][lane] = r as u16;
        out[1][lane] = g as u16;
        out[2][lane] = b as u16;
        out[3][lane] = a as u16;
    }
    out
}

fn eval_gradient_f32(gradient: &raster_color::Gradient, x0: u32, y0: u32, start: usize, count: usize) -> RgbaLaneF32 {
    let mut out: RgbaLaneF32 = [[0.0; LANES]; 4];
    for lane in 0..count {
        let Pixel::Rgba { r, g, b, a } = gradient.get_pixel(x0 + (start + lane) as u32, y0) else {
            unreachable!()
        };
        out[0][lane] = r as f32 / 255.0;
        out[1][lane] = g as f32 / 255.0;
        out[2][lane] = b as f32 / 255.0;
        out[3][lane] = a as f32 / 255.0;
    }
    out
}

fn eval_dither_u16(pattern: &dyn DitherPattern, x0: u32, y0: u32, start: usize, count: usize) -> RgbaLaneU16 {
    let mut out: RgbaLaneU16 = [[0; LANES]; 4];
    for lane in 0..count {
        let Pixel::Rgba { r, g, b, a } = pattern.sample(x0 + (start + lane) as u32, y0).to_rgba() else {
            unreachable!()
        };
        out[0][lane] = r as u16;
        out[1][lane] = g as u16;
        out[2][lane] = b as u16;
        out[3][lane] = a as u16;
    }
    out
}

fn eval_dither_f32(pattern: &dyn DitherPattern, x0: u32, y0: u32, start: usize, count: usize) -> RgbaLaneF32 {
    let mut out: RgbaLaneF32 = [[0.0; LANES]; 4];
    for lane in 0..count {
        let Pixel::Rgba { r, g, b, a } = pattern.sample(x0 + (start + lane) as u32, y0).to_rgba() else {
            unreachable!()
        };
        out[0][lane] = r as f32 / 255.0;
        out[1][lane] = g as f32 / 255.0;
        out[2][lane] = b as f32 / 255.0;
        out[3][lane] = a as f32 / 255.0;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::StrideFormat;

    /// A mask pattern whose alpha (not color) carries the coverage signal,
    /// the shape a dither collaborator's output takes for masking use.
    struct CheckerMask;
    impl DitherPattern for CheckerMask {
        fn sample(&self, x: u32, y: u32) -> Pixel {
            if (x + y) % 2 == 0 { Pixel::rgba(0, 0, 0, 255) } else { Pixel::rgba(0, 0, 0, 0) }
        }
    }

    #[test]
    fn test_zero_length_destination_is_noop() {
        let mut buf: [u8; 0] = [];
        let mut dst = StrideMut::new(StrideFormat::Rgba, &mut buf, 0, 0, 0);
        let ops = [Operation::new(Operator::Src, Param::None, Param::Pixel(Pixel::rgba(1, 2, 3, 255)))];
        composite(&mut dst, &ops, Precision::Integer); // must not panic
    }

    #[test]
    fn test_src_over_single_op_full_lane_group() {
        let mut buf = vec![0u8; LANES * 4];
        {
            let mut dst = StrideMut::new(StrideFormat::Rgba, &mut buf, LANES as u32, 0, LANES as u32);
            let bg = Pixel::rgba(176, 59, 54, 255);
            for i in 0..LANES {
                dst.set(i, bg);
            }
        }
        let fg = Pixel::rgba(143, 128, 227, 255);
        let mut dst = StrideMut::new(StrideFormat::Rgba, &mut buf, LANES as u32, 0, LANES as u32);
        let ops = [Operation::new(Operator::SrcOver, Param::None, Param::Pixel(fg))];
        composite(&mut dst, &ops, Precision::Integer);
        for i in 0..LANES {
            assert_eq!(dst.get(i), Pixel::rgba(143, 128, 227, 255));
        }
    }

    #[test]
    fn test_tail_group_matches_full_group_result() {
        // N = 11: one full lane group (8) plus a tail of 3.
        let n = 11;
        let mut buf = vec![0u8; n * 4];
        {
            let mut dst = StrideMut::new(StrideFormat::Rgba, &mut buf, n as u32, 0, n as u32);
            for i in 0..n {
                dst.set(i, Pixel::rgba(50, 50, 50, 255));
            }
        }
        let fg = Pixel::rgba(200, 100, 20, 255);
        let mut dst = StrideMut::new(StrideFormat::Rgba, &mut buf, n as u32, 0, n as u32);
        let ops = [Operation::new(Operator::SrcOver, Param::None, Param::Pixel(fg))];
        composite(&mut dst, &ops, Precision::Integer);
        for i in 0..n {
            assert_eq!(dst.get(i), Pixel::rgba(200, 100, 20, 255), "pixel {i}");
        }
    }

    #[test]
    fn test_chained_working_value_mask_then_blend() {
        // op1: dst=None (first op, reads D = transparent black), src=dither
        // mask -> working = mask exactly (src_over onto transparent is a
        // passthrough). op2: dst=an explicit color, src=None (reuses the
        // mask as the previous operation's src) -> dst_in keeps `color`
        // wherever the mask's alpha is set, transparent elsewhere.
        let mut buf = vec![0u8; 4 * 4];
        let mut dst = StrideMut::new(StrideFormat::Rgba, &mut buf, 4, 0, 4);
        let color = Pixel::rgba(10, 20, 30, 255);
        let ops = [
            Operation::new(Operator::SrcOver, Param::None, Param::Dither(&CheckerMask, 0, 0)),
            Operation::new(Operator::DstIn, Param::Pixel(color), Param::None),
        ];
        composite(&mut dst, &ops, Precision::Integer);
        assert_eq!(dst.get(0), color); // (0+0)%2==0 -> mask alpha 255
        assert_eq!(dst.get(1), Pixel::TRANSPARENT_BLACK); // mask alpha 0
    }
}
