//! Pixel value types: RGB, RGBA, and packed alpha-only formats.
//!
//! [`Pixel`] is a variant over the six concrete storage formats a surface
//! scanline can hold. Multi-channel pixels (`Rgb`, `Rgba`) are always
//! stored **premultiplied**; alpha-only formats narrower than 8 bits keep
//! their value in the low bits of a `u8` (e.g. `Alpha4` holds `0..=15`).
//!
//! # Usage
//!
//! ```rust
//! use raster_core::Pixel;
//!
//! let src = Pixel::rgba(200, 100, 50, 255);
//! let alpha_only = src.to_alpha8();
//! assert_eq!(alpha_only, Pixel::alpha8(255));
//! ```

/// A single pixel value in one of six concrete formats.
///
/// All multi-channel variants (`Rgb`, `Rgba`) are stored premultiplied.
/// Packed alpha-only formats (`Alpha4`, `Alpha2`, `Alpha1`) store their
/// value right-aligned in a `u8`; `Alpha4` in `0..=15`, `Alpha2` in
/// `0..=3`, `Alpha1` in `0..=1`. Addressing these within a packed byte
/// buffer is [`crate::stride`]'s job, not this type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    /// 3 channels, no alpha. Treated as opaque (alpha == 255) by every
    /// conversion that needs one.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// 4 channels, premultiplied alpha.
    Rgba {
        /// Red channel, premultiplied.
        r: u8,
        /// Green channel, premultiplied.
        g: u8,
        /// Blue channel, premultiplied.
        b: u8,
        /// Alpha channel.
        a: u8,
    },
    /// 8-bit alpha only.
    Alpha8 {
        /// Alpha value, full `u8` range.
        a: u8,
    },
    /// 4-bit alpha only, value in `0..=15`.
    Alpha4 {
        /// Alpha value, low 4 bits significant.
        a: u8,
    },
    /// 2-bit alpha only, value in `0..=3`.
    Alpha2 {
        /// Alpha value, low 2 bits significant.
        a: u8,
    },
    /// 1-bit alpha only, value in `0..=1`.
    Alpha1 {
        /// Alpha value, 0 or 1.
        a: u8,
    },
}

impl Pixel {
    /// Transparent black in RGBA (the stop-list-search fallback value).
    pub const TRANSPARENT_BLACK: Pixel = Pixel::Rgba { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque black in RGBA.
    pub const OPAQUE_BLACK: Pixel = Pixel::Rgba { r: 0, g: 0, b: 0, a: 255 };

    /// Builds an opaque RGB pixel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Builds a premultiplied RGBA pixel.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Builds an 8-bit alpha pixel.
    #[inline]
    pub const fn alpha8(a: u8) -> Self {
        Self::Alpha8 { a }
    }

    /// Builds a 4-bit alpha pixel; `a` is clamped to `0..=15`.
    #[inline]
    pub fn alpha4(a: u8) -> Self {
        Self::Alpha4 { a: a.min(15) }
    }

    /// Builds a 2-bit alpha pixel; `a` is clamped to `0..=3`.
    #[inline]
    pub fn alpha2(a: u8) -> Self {
        Self::Alpha2 { a: a.min(3) }
    }

    /// Builds a 1-bit alpha pixel; `a` is clamped to `0..=1`.
    #[inline]
    pub fn alpha1(a: u8) -> Self {
        Self::Alpha1 { a: a.min(1) }
    }

    /// The number of bits this format's per-pixel value occupies.
    #[inline]
    pub const fn bits(&self) -> u8 {
        match self {
            Self::Rgb { .. } => 24,
            Self::Rgba { .. } => 32,
            Self::Alpha8 { .. } => 8,
            Self::Alpha4 { .. } => 4,
            Self::Alpha2 { .. } => 2,
            Self::Alpha1 { .. } => 1,
        }
    }

    /// Returns this pixel's alpha scaled to the full 8-bit range.
    ///
    /// `Rgb` has no alpha channel of its own and is always treated as
    /// opaque, per the rule that conversion from alpha-only to RGB yields
    /// black with implicit opaque alpha for RGB.
    #[inline]
    pub fn alpha8_value(&self) -> u8 {
        match *self {
            Self::Rgb { .. } => 255,
            Self::Rgba { a, .. } => a,
            Self::Alpha8 { a } => a,
            Self::Alpha4 { a } => bits::widen_4_to_8(a),
            Self::Alpha2 { a } => bits::widen_2_to_8(a),
            Self::Alpha1 { a } => bits::widen_1_to_8(a),
        }
    }

    /// Converts to `Rgb`, discarding any alpha channel. Conversion from
    /// RGB/RGBA to an alpha-only format discards color; the reverse,
    /// dropping alpha while keeping color, is the natural complement and
    /// is what every multi-channel-to-`Rgb` path uses.
    #[inline]
    pub fn to_rgb(&self) -> Pixel {
        match *self {
            Self::Rgb { r, g, b } => Pixel::rgb(r, g, b),
            Self::Rgba { r, g, b, .. } => Pixel::rgb(r, g, b),
            _ => Pixel::rgb(0, 0, 0),
        }
    }

    /// Converts to `Rgba`. Color channels become black for alpha-only
    /// sources; `Rgb` gets an implicit opaque alpha.
    #[inline]
    pub fn to_rgba(&self) -> Pixel {
        match *self {
            Self::Rgb { r, g, b } => Pixel::rgba(r, g, b, 255),
            Self::Rgba { r, g, b, a } => Pixel::rgba(r, g, b, a),
            _ => Pixel::rgba(0, 0, 0, self.alpha8_value()),
        }
    }

    /// Converts to `Alpha8`.
    #[inline]
    pub fn to_alpha8(&self) -> Pixel {
        Pixel::alpha8(self.alpha8_value())
    }

    /// Converts to `Alpha4` by floor-dividing the 8-bit alpha down to 4 bits.
    #[inline]
    pub fn to_alpha4(&self) -> Pixel {
        Pixel::alpha4(bits::narrow_8_to_4(self.alpha8_value()))
    }

    /// Converts to `Alpha2` by floor-dividing the 8-bit alpha down to 2 bits.
    #[inline]
    pub fn to_alpha2(&self) -> Pixel {
        Pixel::alpha2(bits::narrow_8_to_2(self.alpha8_value()))
    }

    /// Converts to `Alpha1` by floor-dividing the 8-bit alpha down to 1 bit.
    #[inline]
    pub fn to_alpha1(&self) -> Pixel {
        Pixel::alpha1(bits::narrow_8_to_1(self.alpha8_value()))
    }

    /// Premultiplies a straight (de-multiplied) RGBA pixel.
    ///
    /// `a == 0` forces color channels to zero per the premultiply invariant.
    #[inline]
    pub fn premultiply(straight: Pixel) -> Pixel {
        let Self::Rgba { r, g, b, a } = straight.to_rgba() else {
            unreachable!("to_rgba always returns Rgba")
        };
        if a == 0 {
            return Pixel::TRANSPARENT_BLACK;
        }
        Pixel::rgba(mul_div_255(r, a), mul_div_255(g, a), mul_div_255(b, a), a)
    }

    /// De-multiplies a premultiplied RGBA pixel back to straight alpha.
    ///
    /// `a == 0` yields `(0,0,0,0)`.
    #[inline]
    pub fn demultiply(premultiplied: Pixel) -> Pixel {
        let Self::Rgba { r, g, b, a } = premultiplied.to_rgba() else {
            unreachable!("to_rgba always returns Rgba")
        };
        if a == 0 {
            return Pixel::TRANSPARENT_BLACK;
        }
        Pixel::rgba(div_round(r, a), div_round(g, a), div_round(b, a), a)
    }
}

/// `round(c * a / 255)`, used by [`Pixel::premultiply`].
#[inline]
fn mul_div_255(c: u8, a: u8) -> u8 {
    ((c as u32 * a as u32 + 127) / 255) as u8
}

/// `round(c * 255 / a)` clamped to `u8`, used by [`Pixel::demultiply`].
#[inline]
fn div_round(c: u8, a: u8) -> u8 {
    (((c as u32 * 255 + a as u32 / 2) / a as u32).min(255)) as u8
}

/// Bit-width narrowing/widening helpers for packed alpha formats.
///
/// Narrowing floor-divides (keeps the top bits); widening replicates bits
/// so that the full narrow range maps onto the full wide range (`0` stays
/// `0`, the max narrow value becomes `255`). This composition is monotone
/// for `convert(wide -> narrow -> wide)`, even though it is not generally
/// exact.
mod bits {
    #[inline]
    pub fn narrow_8_to_4(a: u8) -> u8 {
        a >> 4
    }

    #[inline]
    pub fn narrow_8_to_2(a: u8) -> u8 {
        a >> 6
    }

    #[inline]
    pub fn narrow_8_to_1(a: u8) -> u8 {
        a >> 7
    }

    #[inline]
    pub fn widen_4_to_8(a: u8) -> u8 {
        let a = a & 0x0F;
        (a << 4) | a
    }

    #[inline]
    pub fn widen_2_to_8(a: u8) -> u8 {
        let a = a & 0x03;
        (a << 6) | (a << 4) | (a << 2) | a
    }

    #[inline]
    pub fn widen_1_to_8(a: u8) -> u8 {
        if a & 1 == 1 { 0xFF } else { 0x00 }
    }
}

impl std::fmt::Display for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Rgb { r, g, b } => write!(f, "rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Self::Alpha8 { a } => write!(f, "alpha8({a})"),
            Self::Alpha4 { a } => write!(f, "alpha4({a})"),
            Self::Alpha2 { a } => write!(f, "alpha2({a})"),
            Self::Alpha1 { a } => write!(f, "alpha1({a})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_rgba_implicit_opaque() {
        let rgb = Pixel::rgb(10, 20, 30);
        assert_eq!(rgb.to_rgba(), Pixel::rgba(10, 20, 30, 255));
    }

    #[test]
    fn test_alpha_to_rgb_is_black_opaque() {
        let a = Pixel::alpha8(128);
        assert_eq!(a.to_rgb(), Pixel::rgb(0, 0, 0));
        assert_eq!(a.alpha8_value(), 128);
    }

    #[test]
    fn test_rgba_to_alpha_discards_color() {
        let rgba = Pixel::rgba(9, 200, 37, 64);
        assert_eq!(rgba.to_alpha8(), Pixel::alpha8(64));
    }

    #[test]
    fn test_alpha_width_roundtrip_monotone() {
        // 0 and the max narrow value must round-trip exactly.
        assert_eq!(Pixel::alpha8(0).to_alpha4(), Pixel::alpha4(0));
        assert_eq!(Pixel::alpha4(15).to_alpha8(), Pixel::alpha8(255));
        assert_eq!(Pixel::alpha8(0).to_alpha1(), Pixel::alpha1(0));
        assert_eq!(Pixel::alpha1(1).to_alpha8(), Pixel::alpha8(255));

        // Monotonicity: larger 8-bit alpha never narrows to a smaller value.
        let mut prev = 0u8;
        for a in 0..=255u8 {
            let Pixel::Alpha4 { a: narrowed } = Pixel::alpha8(a).to_alpha4() else {
                unreachable!()
            };
            assert!(narrowed >= prev);
            prev = narrowed;
        }
    }

    #[test]
    fn test_premultiply_demultiply_roundtrip() {
        // Hand-verified exact round trips under round-to-nearest division.
        let cases = [(1u8, 2u8), (2, 3), (1, 100), (2, 100), (3, 7), (255, 255), (0, 0)];
        for (c, a) in cases {
            if a == 0 {
                let demultiplied = Pixel::demultiply(Pixel::rgba(c, c, c, a));
                assert_eq!(demultiplied, Pixel::TRANSPARENT_BLACK);
                continue;
            }
            let premultiplied = Pixel::rgba(c, c, c, a);
            let straight = Pixel::demultiply(premultiplied);
            let back = Pixel::premultiply(straight);
            assert_eq!(back, premultiplied, "roundtrip failed for c={c} a={a}");
        }
    }

    #[test]
    fn test_demultiply_zero_alpha_is_transparent_black() {
        assert_eq!(
            Pixel::demultiply(Pixel::rgba(10, 20, 30, 0)),
            Pixel::TRANSPARENT_BLACK
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Pixel::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Pixel::alpha2(2).to_string(), "alpha2(2)");
    }
}
