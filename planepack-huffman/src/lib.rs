//! # planepack-huffman
//!
//! Huffman coding over single color planes.
//!
//! The codec builds a prefix-free code from the empirical byte distribution
//! of one plane, packs the per-byte codes into a padded bit stream, and
//! serializes the code table in a portable binary form so that any
//! implementation can decode any other's output.
//!
//! ## Determinism
//!
//! Classic Huffman construction is only unique up to tie order: two nodes of
//! equal frequency may merge either way and both results are optimal. This
//! implementation fixes the tie order (the priority queue is keyed by
//! `(frequency, insertion sequence)` with leaves seeded in ascending symbol
//! order), so independent runs and independent implementations produce
//! byte-identical output for the same input.
//!
//! ## Example
//!
//! ```rust
//! use planepack_huffman::{compress_plane, decompress_plane};
//!
//! let plane = b"compressible compressible compressible";
//!
//! let encoded = compress_plane(plane).unwrap();
//! let decoded = decompress_plane(&encoded, plane.len()).unwrap();
//!
//! assert_eq!(decoded, plane);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
mod codes;
mod freq;
mod tree;

pub use codec::{HuffmanCodec, decode_plane, encode_plane};
pub use codes::{Code, CodeTable};
pub use freq::FrequencyTable;
pub use tree::HuffmanTree;

use planepack_core::{EncodedPlane, PlaneCodec, Result};

/// Compress one plane with Huffman coding (convenience function).
///
/// The returned record carries the serialized code table in its `aux` block
/// and the padded bit stream in `data`.
pub fn compress_plane(plane: &[u8]) -> Result<EncodedPlane> {
    HuffmanCodec.encode_plane(plane)
}

/// Decompress one Huffman-coded plane (convenience function).
///
/// `expected_len` is the plane's byte count (width x height); decoding stops
/// after exactly that many symbols.
pub fn decompress_plane(encoded: &EncodedPlane, expected_len: usize) -> Result<Vec<u8>> {
    HuffmanCodec.decode_plane(encoded, expected_len)
}
