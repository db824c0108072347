//! Error types for planepack codec operations.
//!
//! Every failure a codec or the container layer can detect maps to exactly
//! one variant here. Errors are always propagated to the caller as values;
//! corrupt input is never silently truncated or substituted with defaults.

use std::io;
use thiserror::Error;

/// The main error type for planepack codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A zero-length plane or empty code sequence was handed to a codec.
    #[error("Empty input: cannot code a zero-length plane")]
    EmptyInput,

    /// A Huffman bitstream desynchronized: the accumulated bits match no
    /// code in the table.
    #[error("No matching prefix code at bit position {bit_position}")]
    NoMatchingCode {
        /// Bit position where the walk ran out of candidates.
        bit_position: u64,
    },

    /// An LZW code referenced neither an existing dictionary entry nor the
    /// next entry to be assigned.
    #[error("Invalid dictionary code: {0}")]
    InvalidCode(u32),

    /// A decoded plane's byte count disagrees with the container dimensions.
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Byte count implied by width x height.
        expected: usize,
        /// Byte count actually produced or supplied.
        actual: usize,
    },

    /// A container header or length prefix is inconsistent with the actual
    /// data length.
    #[error("Malformed container: {message}")]
    MalformedContainer {
        /// Description of the inconsistency.
        message: String,
    },

    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for planepack codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create a no-matching-code error.
    pub fn no_matching_code(bit_position: u64) -> Self {
        Self::NoMatchingCode { bit_position }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create a malformed container error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedContainer {
            message: message.into(),
        }
    }
}
