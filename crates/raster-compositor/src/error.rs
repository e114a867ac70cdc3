//! Error types for `raster-compositor`.
//!
//! Almost every failure mode in this crate reduces to a no-op (clipped
//! regions, empty strides, float-only operators in integer precision return
//! transparent black) or a debug-assertable precondition violation (first
//! operation's source is `none`, a source stride shorter than the
//! destination) rather than a recoverable [`Error`]. The one genuine
//! construction-time validation boundary is [`crate::Surface`]'s
//! buffer-length check.

use raster_core::StrideFormat;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `raster-compositor`'s fallible constructors.
#[derive(Debug, Error)]
pub enum Error {
    /// [`crate::Surface::from_data`] was given a buffer whose length
    /// doesn't match `width * height` pixels of `format`.
    #[error("surface buffer length mismatch for {width}x{height} {format:?}: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
        /// Surface pixel format.
        format: StrideFormat,
        /// Bytes required for this format/width/height.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },
}
