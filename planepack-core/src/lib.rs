//! # planepack-core
//!
//! Core components for the planepack image compression library.
//!
//! This crate provides the building blocks shared by the per-plane codecs:
//!
//! - [`bitio`]: MSB-first bit packing and unpacking for variable-length codes
//! - [`codec`]: the [`PlaneCodec`] trait and the [`EncodedPlane`] record
//! - [`error`]: the shared error taxonomy
//!
//! ## Architecture
//!
//! planepack is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     compress / decompress / info / test                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Container                                           │
//! │     plane splitting, container layout (planepack-image) │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Huffman, LZW (one color plane at a time)            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitWriter/BitReader, errors, PlaneCodec trait       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use planepack_core::bitio::BitWriter;
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//!
//! let stream = writer.finish();
//! assert_eq!(stream.bit_len(), 7);
//! assert_eq!(stream.pad_bits(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitio;
pub mod codec;
pub mod error;

// Re-exports for convenience
pub use bitio::{BitReader, BitStream, BitWriter};
pub use codec::{EncodedPlane, PlaneCodec};
pub use error::{CodecError, Result};
