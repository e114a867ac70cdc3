//! Gradients: a sorted stop list plus a projection that turns a pixel
//! coordinate into an offset along the stop list.

mod conic;
mod linear;
mod radial;
mod stops;

pub use stops::{GradientStop, StopLookup};

use raster_core::Pixel;
use raster_math::{Transform2D, Vec2};
use tracing::debug;

use crate::error::{Error, Result};
use crate::interpolate::{interpolate_encode, InterpolationMethod};

/// The type-specific part of a gradient's projection.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GradientKind {
    Linear { start: Vec2, end: Vec2 },
    Radial { params: radial::RadialParams },
    Conic { center: Vec2, start_angle: f32 },
}

fn kind_name(kind: &GradientKind) -> &'static str {
    match kind {
        GradientKind::Linear { .. } => "linear",
        GradientKind::Radial { .. } => "radial",
        GradientKind::Conic { .. } => "conic",
    }
}

/// A color gradient: a sorted stop list, an interpolation method, a
/// projection kind (linear/radial/conic), and the inverse of the caller's
/// gradient-space transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<GradientStop>,
    method: InterpolationMethod,
    transform_inv: Transform2D,
    next_insertion_index: u32,
}

impl Gradient {
    /// Builds a linear gradient between `start` and `end`, in surface space.
    pub fn linear(start: Vec2, end: Vec2, method: InterpolationMethod) -> Self {
        Self::new(GradientKind::Linear { start, end }, method)
    }

    /// Builds a two-circle radial gradient. Negative radii are clamped to
    /// `0`.
    pub fn radial(c1: Vec2, r1: f32, c2: Vec2, r2: f32, method: InterpolationMethod) -> Self {
        let params = radial::RadialParams::new(c1, r1, c2, r2);
        Self::new(GradientKind::Radial { params }, method)
    }

    /// Builds a conic gradient sweeping clockwise from `start_angle` radians
    /// around `center`.
    pub fn conic(center: Vec2, start_angle: f32, method: InterpolationMethod) -> Self {
        let start_angle = conic::normalize_angle(start_angle);
        Self::new(GradientKind::Conic { center, start_angle }, method)
    }

    fn new(kind: GradientKind, method: InterpolationMethod) -> Self {
        debug!(kind = ?kind_name(&kind), "constructing gradient");
        Self { kind, stops: Vec::new(), method, transform_inv: Transform2D::IDENTITY, next_insertion_index: 0 }
    }

    /// Appends a color stop at `offset` (clamped to `[0, 1]`). Stops are
    /// kept sorted by `(offset, insertion order)`, so two stops inserted at
    /// the same offset resolve as a hard, instantaneous transition from the
    /// earlier-inserted stop to the later one.
    pub fn add_stop(&mut self, offset: f32, color: crate::color::Color) {
        let stop = GradientStop::new(self.next_insertion_index, offset, color);
        self.next_insertion_index += 1;
        stops::insert_sorted(&mut self.stops, stop);
    }

    /// Replaces the gradient-space transform. Stores its inverse so
    /// per-pixel evaluation is a forward multiply-add; fails without
    /// modifying the gradient if `transform` is not invertible.
    pub fn set_transformation(&mut self, transform: Transform2D) -> Result<()> {
        let inv = transform.invert().ok_or(Error::NonInvertibleTransform)?;
        self.transform_inv = inv;
        debug!(stop_count = self.stops.len(), "gradient transformation updated");
        Ok(())
    }

    /// Computes this gradient's offset at the pixel center `(x + 0.5, y +
    /// 0.5)`, after mapping through the inverse gradient-space transform.
    /// Offsets are always resolved at pixel centers, never corners.
    pub fn get_offset(&self, x: u32, y: u32) -> f32 {
        let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        let p = self.transform_inv.apply(p);
        match self.kind {
            GradientKind::Linear { start, end } => linear::offset(start, end, p),
            GradientKind::Radial { params } => params.offset(p),
            GradientKind::Conic { center, start_angle } => conic::offset(center, start_angle, p),
        }
    }

    /// Resolves the premultiplied RGBA pixel at `(x, y)`: projects to an
    /// offset, looks up the bracketing stops, and interpolates/encodes.
    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let offset = self.get_offset(x, y);
        let StopLookup { c0, c1, rel } = stops::lookup(&self.stops, offset);
        interpolate_encode(&c0, &c1, self.method, rel)
    }
}
