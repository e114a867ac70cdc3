//! The [`Operator`] enum and [`Precision`] selector.

/// One of the 28 compositing/blend modes.
///
/// Every variant has two derived properties, [`Operator::requires_float`]
/// and [`Operator::bounded`], both fixed per-variant; these are part of
/// the public ABI and MUST stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Always transparent black.
    Clear,
    /// Source replaces destination.
    Src,
    /// Destination unchanged.
    Dst,
    /// Porter-Duff source-over.
    SrcOver,
    /// Porter-Duff destination-over.
    DstOver,
    /// Porter-Duff source-in.
    SrcIn,
    /// Porter-Duff destination-in.
    DstIn,
    /// Porter-Duff source-out.
    SrcOut,
    /// Porter-Duff destination-out.
    DstOut,
    /// Porter-Duff source-atop.
    SrcAtop,
    /// Porter-Duff destination-atop.
    DstAtop,
    /// Porter-Duff xor.
    Xor,
    /// Additive (linear dodge), saturating.
    Plus,
    /// Photoshop multiply.
    Multiply,
    /// Photoshop screen.
    Screen,
    /// Photoshop overlay.
    Overlay,
    /// Photoshop darken.
    Darken,
    /// Photoshop lighten.
    Lighten,
    /// Photoshop color dodge.
    ColorDodge,
    /// Photoshop color burn.
    ColorBurn,
    /// Photoshop hard light.
    HardLight,
    /// Photoshop soft light.
    SoftLight,
    /// Photoshop difference.
    Difference,
    /// Photoshop exclusion.
    Exclusion,
    /// Non-separable hue blend.
    Hue,
    /// Non-separable saturation blend.
    Saturation,
    /// Non-separable color blend.
    Color,
    /// Non-separable luminosity blend.
    Luminosity,
}

impl Operator {
    /// All 28 operators, in declaration order.
    pub const ALL: [Operator; 28] = [
        Self::Clear,
        Self::Src,
        Self::Dst,
        Self::SrcOver,
        Self::DstOver,
        Self::SrcIn,
        Self::DstIn,
        Self::SrcOut,
        Self::DstOut,
        Self::SrcAtop,
        Self::DstAtop,
        Self::Xor,
        Self::Plus,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// `true` for the 7 operators that only have a float-precision kernel.
    /// Requesting one of these in integer precision yields transparent
    /// black unless the caller upgrades precision first.
    #[inline]
    pub const fn requires_float(self) -> bool {
        matches!(
            self,
            Self::ColorDodge
                | Self::ColorBurn
                | Self::SoftLight
                | Self::Hue
                | Self::Saturation
                | Self::Color
                | Self::Luminosity
        )
    }

    /// `true` unless this operator is one of the 4 unbounded exceptions
    /// (src_in, dst_in, src_out, dst_atop). Bounded-ness is the painter's
    /// concern, not the compositor's; this flag is exposed for callers
    /// that build a painter on top of this crate.
    #[inline]
    pub const fn bounded(self) -> bool {
        !matches!(self, Self::SrcIn | Self::DstIn | Self::SrcOut | Self::DstAtop)
    }
}

/// The numeric representation a compositor call evaluates kernels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// 16-bit unsigned intermediates over premultiplied `u8` channel values.
    Integer,
    /// `f32` channels in `[0, 1]`.
    Float,
}
