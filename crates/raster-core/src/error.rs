//! Error types for raster-core operations.
//!
//! Most "failures" in the pixel/stride layer are not errors at all - an
//! out-of-range stride constructor returns an empty stride (see
//! [`crate::stride`]) rather than a [`Result`]. The [`Error`] enum here
//! exists for the cases that are genuinely fallible at an API boundary:
//! building a stride directly over a raw, caller-supplied buffer whose
//! size doesn't match its claimed format/length.
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for `Display`/`std::error::Error`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or addressing pixel strides.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw byte buffer is too small for the stride it's being asked to back.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Buffer length in bytes supplied by the caller.
        stride: usize,
        /// Minimum buffer length required for `width` pixels of the format.
        min_stride: usize,
        /// Requested width in pixels.
        width: u32,
    },

    /// Pixel coordinates are outside the addressed buffer.
    #[error("pixel offset {offset} out of bounds for stride of length {len}")]
    OutOfBounds {
        /// Offset that was accessed.
        offset: usize,
        /// Stride length in pixels.
        len: usize,
    },

    /// Generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidStride`] error.
    #[inline]
    pub fn invalid_stride(stride: usize, min_stride: usize, width: u32) -> Self {
        Self::InvalidStride {
            stride,
            min_stride,
            width,
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(offset: usize, len: usize) -> Self {
        Self::OutOfBounds { offset, len }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidStride { .. })
    }
}
