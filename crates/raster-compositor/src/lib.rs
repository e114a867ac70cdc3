//! # raster-compositor
//!
//! Porter-Duff and Photoshop-style compositing operators, the stride
//! compositor that executes a batch of operations against one scanline,
//! and the surface compositor that clips and dispatches a batch against a
//! whole [`Surface`].
//!
//! - [`operator::Operator`]/[`operator::Precision`] - the 28 operators and their two precisions
//! - [`kernel`] - scalar reference, non-separable HSL-luma, and SIMD lane-group kernels
//! - [`transpose`] - interleaved-memory ↔ planar-lane-group conversion
//! - [`stride_compositor`] - one scanline's worth of operations
//! - [`surface_compositor`] - clipping and per-scanline dispatch
//! - [`surface::Surface`] - an owned pixel buffer (not part of the core data model; see `DESIGN.md`)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod kernel;
pub mod operator;
pub mod stride_compositor;
pub mod surface;
pub mod surface_compositor;
pub mod transpose;

pub use error::{Error, Result};
pub use operator::{Operator, Precision};
pub use stride_compositor::{DitherPattern, Operation, Param};
pub use surface::Surface;
pub use surface_compositor::{SourceParam, SurfaceOperation};
#[cfg(feature = "parallel")]
pub use surface_compositor::composite_parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::operator::{Operator, Precision};
    pub use crate::stride_compositor::{self, DitherPattern, Operation, Param};
    pub use crate::surface::Surface;
    #[cfg(feature = "parallel")]
    pub use crate::surface_compositor::composite_parallel;
    pub use crate::surface_compositor::{self, SourceParam, SurfaceOperation};
}
