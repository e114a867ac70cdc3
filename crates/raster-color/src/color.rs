//! The [`Color`] sum type: `LinearRgb | Srgb | Hsl`, all stored
//! de-multiplied. Each variant shares the same premultiply/demultiply and
//! pixel-codec machinery but differs in how its channels relate to linear
//! light; conversions dispatch at the sum-type boundary.

use raster_core::Pixel;
use raster_math::{clamp, round_to_u8, saturate};

use crate::gamma::{apply_gamma, remove_gamma};
use crate::hsl::{hsl_to_rgb, rgb_to_hsl};

/// A color in one of three spaces, always stored de-multiplied.
///
/// `LinearRgb`/`Srgb` channels are clamped to `[0, 1]` on construction;
/// `Hsl` hue is wrapped into `[0, 360)` except that exactly `360` is
/// preserved, so a full-circle interpolation sweep has a distinct
/// endpoint from `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Linear-light RGB, channels in `[0, 1]`.
    LinearRgb {
        /// Red.
        r: f32,
        /// Green.
        g: f32,
        /// Blue.
        b: f32,
        /// Alpha.
        a: f32,
    },
    /// Gamma-encoded (fast γ=2.2) sRGB, channels in `[0, 1]`.
    Srgb {
        /// Red, gamma-encoded.
        r: f32,
        /// Green, gamma-encoded.
        g: f32,
        /// Blue, gamma-encoded.
        b: f32,
        /// Alpha.
        a: f32,
    },
    /// Hue/saturation/lightness. `h` in `[0, 360]`, `s`/`l`/`a` in `[0, 1]`.
    Hsl {
        /// Hue, degrees.
        h: f32,
        /// Saturation.
        s: f32,
        /// Lightness.
        l: f32,
        /// Alpha.
        a: f32,
    },
}

/// Wraps a hue into `[0, 360)`, preserving exactly `360`.
#[inline]
fn wrap_hue(h: f32) -> f32 {
    if h == 360.0 {
        return 360.0;
    }
    h.rem_euclid(360.0)
}

impl Color {
    /// Opaque black in linear RGB.
    pub const BLACK: Color = Color::LinearRgb { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Transparent black in linear RGB, the stop-search fallback.
    pub const TRANSPARENT: Color = Color::LinearRgb { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Builds a linear RGB color, clamping every channel to `[0, 1]`.
    #[inline]
    pub fn linear_rgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::LinearRgb { r: saturate(r), g: saturate(g), b: saturate(b), a: saturate(a) }
    }

    /// Builds an sRGB color, clamping every channel to `[0, 1]`.
    #[inline]
    pub fn srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::Srgb { r: saturate(r), g: saturate(g), b: saturate(b), a: saturate(a) }
    }

    /// Builds an HSL color; `h` is wrapped per [`wrap_hue`], `s`/`l`/`a`
    /// clamped to `[0, 1]`.
    #[inline]
    pub fn hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self::Hsl { h: wrap_hue(h), s: saturate(s), l: saturate(l), a: saturate(a) }
    }

    /// This color's alpha channel.
    #[inline]
    pub fn alpha(&self) -> f32 {
        match *self {
            Self::LinearRgb { a, .. } | Self::Srgb { a, .. } | Self::Hsl { a, .. } => a,
        }
    }

    /// Converts to `LinearRgb`, regardless of the source variant.
    pub fn to_linear_rgb(&self) -> Color {
        match *self {
            Self::LinearRgb { .. } => *self,
            Self::Srgb { r, g, b, a } => {
                Color::linear_rgb(remove_gamma(r), remove_gamma(g), remove_gamma(b), a)
            }
            Self::Hsl { h, s, l, a } => {
                let (r, g, b) = hsl_to_rgb(h, s, l);
                Color::linear_rgb(r, g, b, a)
            }
        }
    }

    /// Converts to `Srgb`, regardless of the source variant.
    pub fn to_srgb(&self) -> Color {
        match *self {
            Self::Srgb { .. } => *self,
            Self::LinearRgb { r, g, b, a } => {
                Color::srgb(apply_gamma(r), apply_gamma(g), apply_gamma(b), a)
            }
            Self::Hsl { .. } => self.to_linear_rgb().to_srgb(),
        }
    }

    /// Converts to `Hsl`, regardless of the source variant.
    pub fn to_hsl(&self) -> Color {
        match *self {
            Self::Hsl { .. } => *self,
            Self::LinearRgb { r, g, b, a } => {
                let (h, s, l) = rgb_to_hsl(r, g, b);
                Color::hsl(h, s, l, a)
            }
            Self::Srgb { .. } => self.to_linear_rgb().to_hsl(),
        }
    }

    /// Decodes a premultiplied RGBA pixel into a de-multiplied `LinearRgb`
    /// color: demultiply, then scale to `f32`.
    pub fn decode_rgba_linear(pixel: Pixel) -> Color {
        let straight = Pixel::demultiply(pixel.to_rgba());
        let Pixel::Rgba { r, g, b, a } = straight else { unreachable!() };
        Color::linear_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Decodes a premultiplied RGBA pixel into a de-multiplied `Srgb`
    /// color: demultiply, scale to `f32`, then apply gamma.
    pub fn decode_rgba_srgb(pixel: Pixel) -> Color {
        let straight = Color::decode_rgba_linear(pixel);
        straight.to_srgb()
    }

    /// Decodes without demultiplying or applying gamma - used inside
    /// already-linear pipelines that received a straight-alpha pixel.
    pub fn decode_rgba_linear_raw(pixel: Pixel) -> Color {
        let Pixel::Rgba { r, g, b, a } = pixel.to_rgba() else { unreachable!() };
        Color::linear_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Encodes this color to a premultiplied RGBA pixel: remove gamma (for
    /// `Srgb`) or convert to linear (for `Hsl`), scale with round-to-nearest,
    /// then premultiply (round half away from zero).
    pub fn encode_rgba(&self) -> Pixel {
        let Color::LinearRgb { r, g, b, a } = self.to_linear_rgb() else { unreachable!() };
        let straight = Pixel::rgba(round_to_u8(r), round_to_u8(g), round_to_u8(b), round_to_u8(a));
        Pixel::premultiply(straight)
    }

    /// Encodes without removing gamma or premultiplying - the raw
    /// counterpart to [`Color::decode_rgba_linear_raw`], used inside
    /// already-linear pipelines.
    pub fn encode_rgba_raw(&self) -> Pixel {
        let Color::LinearRgb { r, g, b, a } = self.to_linear_rgb() else { unreachable!() };
        Pixel::rgba(round_to_u8(r), round_to_u8(g), round_to_u8(b), round_to_u8(a))
    }

    /// Premultiplies this color's channels by its own alpha (the color-space
    /// analogue of [`Pixel::premultiply`], used mid-interpolation).
    pub(crate) fn premultiplied_channels(&self) -> (f32, f32, f32, f32) {
        match *self {
            Self::LinearRgb { r, g, b, a } | Self::Srgb { r, g, b, a } => (r * a, g * a, b * a, a),
            Self::Hsl { h, s, l, a } => (h, s * a, l * a, a),
        }
    }

    /// Clamps every channel to `[0, 1]` (hue excepted), mirroring the
    /// construction-time clamp in [`Color::linear_rgb`]/[`Color::srgb`]/
    /// [`Color::hsl`]. Used after extrapolating interpolation (`t` outside
    /// `[0, 1]`) where `linear_rgb`/`srgb` channels can land out of range.
    pub fn clamp_channels(&self) -> Color {
        match *self {
            Self::LinearRgb { r, g, b, a } => {
                Self::LinearRgb { r: clamp(r, 0.0, 1.0), g: clamp(g, 0.0, 1.0), b: clamp(b, 0.0, 1.0), a: clamp(a, 0.0, 1.0) }
            }
            Self::Srgb { r, g, b, a } => {
                Self::Srgb { r: clamp(r, 0.0, 1.0), g: clamp(g, 0.0, 1.0), b: clamp(b, 0.0, 1.0), a: clamp(a, 0.0, 1.0) }
            }
            Self::Hsl { h, s, l, a } => Self::hsl(h, clamp(s, 0.0, 1.0), clamp(l, 0.0, 1.0), clamp(a, 0.0, 1.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hue_wrap_preserves_360() {
        assert_eq!(Color::hsl(360.0, 1.0, 0.5, 1.0), Color::Hsl { h: 360.0, s: 1.0, l: 0.5, a: 1.0 });
    }

    #[test]
    fn test_hue_wraps_multiples_of_360() {
        let base = Color::hsl(30.0, 0.5, 0.5, 1.0);
        let wrapped = Color::hsl(30.0 + 720.0, 0.5, 0.5, 1.0);
        assert_eq!(base, wrapped);
    }

    #[test]
    fn test_linear_rgb_clamps_out_of_range() {
        let c = Color::linear_rgb(-0.5, 1.5, 0.5, 2.0);
        assert_eq!(c, Color::LinearRgb { r: 0.0, g: 1.0, b: 0.5, a: 1.0 });
    }

    #[test]
    fn test_decode_encode_raw_roundtrip() {
        // for any u8 RGBA p, encode_raw(decode_raw(p)) == p.
        for &(r, g, b, a) in &[(0u8, 0u8, 0u8, 0u8), (255, 128, 64, 200), (1, 2, 3, 255), (10, 200, 50, 1)] {
            let p = Pixel::rgba(r, g, b, a);
            let decoded = Color::decode_rgba_linear_raw(p);
            let encoded = decoded.encode_rgba_raw();
            assert_eq!(encoded, Pixel::rgba(r, g, b, a), "roundtrip failed for ({r},{g},{b},{a})");
        }
    }

    #[test]
    fn test_srgb_roundtrip_through_linear() {
        let c = Color::srgb(0.6, 0.3, 0.8, 1.0);
        let back = c.to_linear_rgb().to_srgb();
        let Color::Srgb { r, g, b, a } = back else { unreachable!() };
        let Color::Srgb { r: r0, g: g0, b: b0, a: a0 } = c else { unreachable!() };
        assert_abs_diff_eq!(r, r0, epsilon = 1e-5);
        assert_abs_diff_eq!(g, g0, epsilon = 1e-5);
        assert_abs_diff_eq!(b, b0, epsilon = 1e-5);
        assert_abs_diff_eq!(a, a0, epsilon = 1e-5);
    }

    #[test]
    fn test_decode_demultiplies_before_scaling() {
        // a fully-transparent premultiplied pixel demultiplies to (0,0,0,0)
        let p = Pixel::rgba(10, 20, 30, 0);
        let decoded = Color::decode_rgba_linear(p);
        assert_eq!(decoded, Color::LinearRgb { r: 0.0, g: 0.0, b: 0.0, a: 0.0 });
    }

    #[test]
    fn test_hsl_to_linear_yellow() {
        let c = Color::hsl(60.0, 1.0, 0.5, 1.0);
        let Color::LinearRgb { r, g, b, .. } = c.to_linear_rgb() else { unreachable!() };
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-5);
    }
}
