//! Error types for `raster-color` operations.
//!
//! Most color/gradient construction in this crate cannot fail: `Color::init`
//! clamps rather than rejecting, and stop-list insertion always succeeds.
//! The two genuinely fallible cases get real error variants; everything
//! else is infallible by construction.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a [`crate::gradient::Gradient`].
#[derive(Debug, Error)]
pub enum Error {
    /// `set_transformation` was given a matrix with a (near-)zero
    /// determinant; the gradient keeps whatever transform it had before
    /// the call.
    #[error("transformation matrix is not invertible")]
    NonInvertibleTransform,

    /// A caller-provided preallocated stop buffer ran out of capacity
    /// when using the assume-capacity variant that writes into a
    /// caller-provided preallocated stop buffer. The gradient remains
    /// usable with whichever stops were added before the failure.
    #[error("failed to grow stop buffer: requested {requested}, reason: {reason}")]
    AllocationFailed {
        /// Number of stops the caller attempted to hold.
        requested: usize,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed { requested, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_invertible_message() {
        let err = Error::NonInvertibleTransform;
        assert!(err.to_string().contains("invertible"));
    }

    #[test]
    fn test_allocation_failed() {
        let err = Error::allocation_failed(64, "out of memory");
        assert!(err.to_string().contains("64"));
        assert!(err.to_string().contains("out of memory"));
    }
}
