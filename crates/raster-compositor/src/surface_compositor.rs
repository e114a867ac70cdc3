//! The surface compositor: clips a batch of operations against a
//! destination [`Surface`]'s bounds and dispatches one [`stride_compositor`]
//! call per scanline.

use raster_core::Pixel;
use raster_color::Gradient;
use tracing::{debug, trace};

use crate::operator::{Operator, Precision};
use crate::stride_compositor::{self, DitherPattern, Param};
use crate::surface::Surface;

/// One parameter to a [`SurfaceOperation`]: where a `dst` or `src` operand
/// comes from, at the surface-compositor level.
#[derive(Clone, Copy)]
pub enum SourceParam<'a> {
    /// Reuse the working value, identical in meaning to
    /// [`stride_compositor::Param::None`].
    None,
    /// Broadcast a single pixel.
    Pixel(Pixel),
    /// Read from another surface.
    Surface(&'a Surface),
    /// Evaluate a gradient in destination pixel-space.
    Gradient(&'a Gradient),
    /// Evaluate a dither pattern in destination pixel-space.
    Dither(&'a dyn DitherPattern),
}

/// One step of a surface-compositor batch.
pub struct SurfaceOperation<'a> {
    /// The operator this step applies.
    pub operator: Operator,
    /// This step's destination operand.
    pub dst: SourceParam<'a>,
    /// This step's source operand.
    pub src: SourceParam<'a>,
}

impl<'a> SurfaceOperation<'a> {
    /// Builds a surface-compositor operation.
    pub fn new(operator: Operator, dst: SourceParam<'a>, src: SourceParam<'a>) -> Self {
        Self { operator, dst, src }
    }
}

/// Composites `ops` onto `ds` at origin `(dst_x, dst_y)`, which may be
/// negative.
pub fn composite(ds: &mut Surface, dst_x: i32, dst_y: i32, ops: &[SurfaceOperation], precision: Precision) {
    if ops.is_empty() {
        return;
    }
    if dst_x as i64 >= ds.width() as i64 || dst_y as i64 >= ds.height() as i64 {
        return;
    }

    let upgraded = ops.iter().any(|op| op.operator.requires_float());
    if upgraded && precision != Precision::Float {
        trace!("precision upgraded to float: a float-only operator is present in this batch");
    }
    let precision = if upgraded { Precision::Float } else { precision };

    let (src_w, src_h) = match ops[0].src {
        SourceParam::Pixel(_) | SourceParam::Gradient(_) | SourceParam::Dither(_) => {
            if dst_x != 0 || dst_y != 0 {
                return;
            }
            (ds.width(), ds.height())
        }
        SourceParam::Surface(s) => (s.width(), s.height()),
        SourceParam::None => return,
    };

    let src_start_x = (-dst_x).max(0) as u32;
    let src_start_y = (-dst_y).max(0) as u32;

    let width = src_w.min((ds.width() as i64 - dst_x as i64).max(0) as u32);
    let height = src_h.min((ds.height() as i64 - dst_y as i64).max(0) as u32);

    if src_start_x >= width || src_start_y >= height {
        return;
    }

    debug!(
        ?precision,
        clip_x = src_start_x,
        clip_y = src_start_y,
        clip_width = width - src_start_x,
        clip_height = height - src_start_y,
        "surface composite"
    );

    for src_y in src_start_y..height {
        let dst_start_x64 = src_start_x as i64 + dst_x as i64;
        let dst_start_y64 = src_y as i64 + dst_y as i64;
        debug_assert!(
            dst_start_x64 >= 0 && dst_start_y64 >= 0,
            "surface compositor: computed negative destination start ({dst_start_x64}, {dst_start_y64})"
        );
        let dst_start_x = dst_start_x64 as u32;
        let dst_start_y = dst_start_y64 as u32;
        let scanline_len = width.saturating_sub(src_start_x);

        let row_ops: Vec<stride_compositor::Operation> = ops
            .iter()
            .map(|op| {
                stride_compositor::Operation::new(
                    op.operator,
                    to_dst_param(op.dst, dst_start_x, dst_start_y, scanline_len),
                    to_src_param(op.src, src_start_x, src_y, scanline_len, dst_start_x, dst_start_y),
                )
            })
            .collect();

        let mut dst_stride = ds.stride_mut(dst_start_x, dst_start_y, scanline_len);
        stride_compositor::composite(&mut dst_stride, &row_ops, precision);
    }
}

/// Parallel counterpart of [`composite`] (feature `parallel`, default off):
/// dispatches scanlines across a rayon thread pool instead of a sequential
/// loop. A caller opt-in rather than an always-on optimization, since
/// rayon's pool setup cost only pays off on tall destination regions.
#[cfg(feature = "parallel")]
pub fn composite_parallel(ds: &mut Surface, dst_x: i32, dst_y: i32, ops: &[SurfaceOperation], precision: Precision) {
    use rayon::prelude::*;

    if ops.is_empty() {
        return;
    }
    if dst_x as i64 >= ds.width() as i64 || dst_y as i64 >= ds.height() as i64 {
        return;
    }

    let upgraded = ops.iter().any(|op| op.operator.requires_float());
    if upgraded && precision != Precision::Float {
        trace!("precision upgraded to float: a float-only operator is present in this batch");
    }
    let precision = if upgraded { Precision::Float } else { precision };

    let (src_w, src_h) = match ops[0].src {
        SourceParam::Pixel(_) | SourceParam::Gradient(_) | SourceParam::Dither(_) => {
            if dst_x != 0 || dst_y != 0 {
                return;
            }
            (ds.width(), ds.height())
        }
        SourceParam::Surface(s) => (s.width(), s.height()),
        SourceParam::None => return,
    };

    let src_start_x = (-dst_x).max(0) as u32;
    let src_start_y = (-dst_y).max(0) as u32;

    let width = src_w.min((ds.width() as i64 - dst_x as i64).max(0) as u32);
    let height = src_h.min((ds.height() as i64 - dst_y as i64).max(0) as u32);

    if src_start_x >= width || src_start_y >= height {
        return;
    }

    debug!(
        ?precision,
        clip_x = src_start_x,
        clip_y = src_start_y,
        clip_width = width - src_start_x,
        clip_height = height - src_start_y,
        "surface composite (parallel)"
    );

    let format = ds.format();
    let dst_width = ds.width();
    let row_bytes = ds.row_bytes();
    let scanline_len = width.saturating_sub(src_start_x);
    let dst_row_first = src_start_y as i64 + dst_y as i64;
    debug_assert!(dst_row_first >= 0, "surface compositor: negative destination row start");
    let num_rows = (height - src_start_y) as usize;

    ds.data_mut()
        .par_chunks_mut(row_bytes)
        .skip(dst_row_first as usize)
        .take(num_rows)
        .enumerate()
        .for_each(|(i, row_buf)| {
            let src_y = src_start_y + i as u32;
            let dst_start_x64 = src_start_x as i64 + dst_x as i64;
            debug_assert!(dst_start_x64 >= 0, "surface compositor: negative destination column start");
            let dst_start_x = dst_start_x64 as u32;
            let dst_start_y = dst_row_first as u32 + i as u32;

            let row_ops: Vec<stride_compositor::Operation> = ops
                .iter()
                .map(|op| {
                    stride_compositor::Operation::new(
                        op.operator,
                        to_dst_param(op.dst, dst_start_x, dst_start_y, scanline_len),
                        to_src_param(op.src, src_start_x, src_y, scanline_len, dst_start_x, dst_start_y),
                    )
                })
                .collect();

            let mut dst_stride = raster_core::StrideMut::new(format, row_buf, dst_width, dst_start_x, scanline_len);
            stride_compositor::composite(&mut dst_stride, &row_ops, precision);
        });
}

fn to_dst_param(p: SourceParam, x: u32, y: u32, len: u32) -> Param {
    match p {
        SourceParam::None => Param::None,
        SourceParam::Pixel(px) => Param::Pixel(px),
        SourceParam::Surface(s) => Param::Stride(s.stride_view(x, y, len)),
        SourceParam::Gradient(g) => Param::Gradient(g, x, y),
        SourceParam::Dither(d) => Param::Dither(d, x, y),
    }
}

fn to_src_param(p: SourceParam, src_x: u32, src_y: u32, len: u32, dst_x: u32, dst_y: u32) -> Param {
    match p {
        SourceParam::None => Param::None,
        SourceParam::Pixel(px) => Param::Pixel(px),
        SourceParam::Surface(s) => Param::Stride(s.stride_view(src_x, src_y, len)),
        // Gradients/dithers are evaluated in destination pixel-space even
        // when used as a `src` operand, against the destination's own
        // (dst_x, dst_y) origin rather than the source's.
        SourceParam::Gradient(g) => Param::Gradient(g, dst_x, dst_y),
        SourceParam::Dither(d) => Param::Dither(d, dst_x, dst_y),
    }
}
