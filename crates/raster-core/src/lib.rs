//! # raster-core
//!
//! Pixel and stride value types for the raster compositor.
//!
//! - [`Pixel`] - RGB/RGBA/Alpha8/4/2/1 value type, premultiplied at rest
//! - [`StrideView`]/[`StrideMut`] - typed references into a scanline
//!   sub-range, including packed sub-byte alpha addressing
//! - [`Rect`] - axis-aligned clipping rectangle
//!
//! This crate has no internal workspace dependencies; `raster-math`,
//! `raster-color`, and `raster-compositor` all build on it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod rect;
pub mod stride;

pub use error::{Error, Result};
pub use pixel::Pixel;
pub use rect::Rect;
pub use stride::{StrideFormat, StrideMut, StrideView};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Pixel;
    pub use crate::rect::Rect;
    pub use crate::stride::{StrideFormat, StrideMut, StrideView};
}
