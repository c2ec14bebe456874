//! Errors surfaced by the transform entry points.

use thiserror::Error;

/// Rejected inputs. Nothing here is retried and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftError {
    /// The forward transform only accepts square images.
    #[error("image width ({width}) must be same as image height ({height})")]
    DimensionMismatch { width: usize, height: usize },

    /// A radix-2 transform was asked for a length that is not a power of two.
    #[error("transform length {len} is not a power of two, pad the image first")]
    UnsupportedSize { len: usize },

    /// Raw RGBA bytes do not cover `width * height` pixels.
    #[error("invalid RGBA buffer: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}
