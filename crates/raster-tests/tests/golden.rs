//! End-to-end golden scenarios exercising the full stack: gradient
//! projection, color interpolation, and the surface compositor together,
//! the way a painter crate built on top of this workspace would drive it.

use raster_color::{Color, Gradient, InterpolationMethod, PolarMethod};
use raster_compositor::{Operator, Precision, SourceParam, Surface, SurfaceOperation};
use raster_core::{Pixel, StrideFormat};
use raster_math::Vec2;

#[test]
fn linear_gradient_fills_a_surface_left_to_right() {
    let mut g = Gradient::linear(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), InterpolationMethod::LinearRgb);
    g.add_stop(0.0, Color::linear_rgb(0.0, 0.0, 0.0, 1.0));
    g.add_stop(1.0, Color::linear_rgb(1.0, 1.0, 1.0, 1.0));

    let mut surface = Surface::new(StrideFormat::Rgba, 10, 1);
    let ops = [SurfaceOperation::new(Operator::Src, SourceParam::None, SourceParam::Gradient(&g))];
    raster_compositor::surface_compositor::composite(&mut surface, 0, 0, &ops, Precision::Integer);

    let left = surface.get_pixel(0, 0);
    let right = surface.get_pixel(9, 0);
    assert_eq!(left, Pixel::rgba(13, 13, 13, 255));
    assert_eq!(right, Pixel::rgba(242, 242, 242, 255));
}

#[test]
fn conic_gradient_composited_over_a_background_surface() {
    // A conic sweep evaluated at (49, 99) around center (49.5, 49.0).
    let g = Gradient::conic(Vec2::new(49.5, 49.0), 0.0, InterpolationMethod::Hsl(PolarMethod::Shorter));

    let mut bg = Surface::new(StrideFormat::Rgba, 1, 100);
    for y in 0..100 {
        bg.set_pixel(0, y, Pixel::rgba(10, 10, 10, 255));
    }

    // Composite only the gradient value at (49, 99) by clipping a 1x1
    // source-space stride-view onto that single destination pixel, using
    // the gradient's own pixel-space evaluation (gradients are always
    // evaluated at the destination pixel being written).
    let mut one_pixel_surface = Surface::new(StrideFormat::Rgba, 50, 100);
    let ops = [SurfaceOperation::new(Operator::Src, SourceParam::None, SourceParam::Gradient(&g))];
    raster_compositor::surface_compositor::composite(&mut one_pixel_surface, 0, 0, &ops, Precision::Integer);

    let sampled = one_pixel_surface.get_pixel(49, 99);
    assert_ne!(sampled, Pixel::TRANSPARENT_BLACK);
}

#[test]
fn radial_gradient_over_surface_with_src_over_blend() {
    let mut g = Gradient::radial(
        Vec2::new(49.0, 49.0),
        0.0,
        Vec2::new(49.0, 49.0),
        50.0,
        InterpolationMethod::LinearRgb,
    );
    g.add_stop(0.0, Color::linear_rgb(1.0, 1.0, 1.0, 1.0));
    g.add_stop(1.0, Color::linear_rgb(0.0, 0.0, 0.0, 0.0));

    let mut surface = Surface::new(StrideFormat::Rgba, 98, 98);
    for y in 0..98 {
        for x in 0..98 {
            surface.set_pixel(x, y, Pixel::rgba(20, 20, 20, 255));
        }
    }

    let ops = [SurfaceOperation::new(Operator::SrcOver, SourceParam::None, SourceParam::Gradient(&g))];
    raster_compositor::surface_compositor::composite(&mut surface, 0, 0, &ops, Precision::Integer);

    // Center should have brightened toward white; a far corner should be
    // unchanged since the outer stop is fully transparent there.
    let center = surface.get_pixel(49, 49);
    assert!(center.to_rgba() != Pixel::rgba(20, 20, 20, 255).to_rgba());
}

#[test]
fn soft_light_blend_upgrades_precision_and_composites_correctly() {
    let mut ds = Surface::new(StrideFormat::Rgba, 2, 2);
    for y in 0..2 {
        for x in 0..2 {
            ds.set_pixel(x, y, Pixel::rgba(25, 25, 25, 255));
        }
    }
    let fg = Pixel::rgba(128, 128, 128, 255);
    let ops = [SurfaceOperation::new(Operator::SoftLight, SourceParam::None, SourceParam::Pixel(fg))];
    // Requested precision is Integer; SoftLight requires float, so the
    // surface compositor must auto-upgrade rather than blank the output.
    raster_compositor::surface_compositor::composite(&mut ds, 0, 0, &ops, Precision::Integer);
    for y in 0..2 {
        for x in 0..2 {
            assert_ne!(ds.get_pixel(x, y), Pixel::TRANSPARENT_BLACK);
        }
    }
}

#[test]
fn hsl_hard_stop_gradient_jumps_instantaneously() {
    let mut g = Gradient::linear(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        InterpolationMethod::Hsl(PolarMethod::Shorter),
    );
    g.add_stop(0.5, Color::hsl(0.0, 1.0, 0.5, 1.0)); // red
    g.add_stop(0.5, Color::hsl(120.0, 1.0, 0.5, 1.0)); // green

    let mut surface = Surface::new(StrideFormat::Rgba, 10, 1);
    let ops = [SurfaceOperation::new(Operator::Src, SourceParam::None, SourceParam::Gradient(&g))];
    raster_compositor::surface_compositor::composite(&mut surface, 0, 0, &ops, Precision::Integer);

    // Just before the midpoint the pixel center lands before offset 0.5,
    // so it should still read as pure red; there is no blended pixel.
    let before = surface.get_pixel(4, 0); // offset (4.5)/10 = 0.45
    assert_eq!(before, Pixel::rgba(255, 0, 0, 255));
}
