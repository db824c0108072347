//! # planepack-lzw
//!
//! LZW dictionary coding over single color planes.
//!
//! The codec runs the incremental dictionary algorithm over one plane's
//! bytes: the dictionary starts with the 256 single-byte strings, grows by
//! one entry per emitted code, and is reconstructed identically by the
//! decoder without ever being transmitted. Codes are serialized as
//! fixed-width 32-bit little-endian values regardless of how large the
//! dictionary grows: deliberately not space-efficient, but it keeps the
//! decoder free of bit-width bookkeeping.
//!
//! ## Example
//!
//! ```rust
//! use planepack_lzw::{compress_plane, decompress_plane};
//!
//! let plane = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let codes = compress_plane(plane).unwrap();
//! assert!(codes.len() < plane.len());
//!
//! let decoded = decompress_plane(&codes).unwrap();
//! assert_eq!(decoded, plane);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;

pub use decoder::{bytes_to_codes, decompress_plane};
pub use dictionary::{DecodeDictionary, EncodeDictionary};
pub use encoder::{codes_to_bytes, compress_plane};

use planepack_core::error::{CodecError, Result};
use planepack_core::{EncodedPlane, PlaneCodec};

/// LZW codec over one color plane.
///
/// The encoded record needs no auxiliary block (the dictionary is implicit),
/// so `aux` is always empty and `data` holds the serialized code stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwCodec;

impl PlaneCodec for LzwCodec {
    fn encode_plane(&self, plane: &[u8]) -> Result<EncodedPlane> {
        let codes = compress_plane(plane)?;
        Ok(EncodedPlane {
            aux: Vec::new(),
            data: codes_to_bytes(&codes),
        })
    }

    fn decode_plane(&self, encoded: &EncodedPlane, expected_len: usize) -> Result<Vec<u8>> {
        if !encoded.aux.is_empty() {
            return Err(CodecError::malformed(
                "LZW plane carries a non-empty auxiliary block",
            ));
        }

        let codes = bytes_to_codes(&encoded.data)?;
        let decoded = decompress_plane(&codes)?;

        if decoded.len() != expected_len {
            return Err(CodecError::size_mismatch(expected_len, decoded.len()));
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_roundtrip() {
        let plane = b"This is a test of compression! ".repeat(10);
        let codec = LzwCodec;

        let encoded = codec.encode_plane(&plane).unwrap();
        assert!(encoded.aux.is_empty());

        let decoded = codec.decode_plane(&encoded, plane.len()).unwrap();
        assert_eq!(decoded, plane);
    }

    #[test]
    fn test_wrong_expected_len_is_size_mismatch() {
        let codec = LzwCodec;
        let encoded = codec.encode_plane(b"xyxyxy").unwrap();
        let err = codec.decode_plane(&encoded, 5).unwrap_err();
        assert!(matches!(err, CodecError::SizeMismatch { .. }));
    }

    #[test]
    fn test_unexpected_aux_rejected() {
        let codec = LzwCodec;
        let mut encoded = codec.encode_plane(b"abc").unwrap();
        encoded.aux = vec![1];
        assert!(matches!(
            codec.decode_plane(&encoded, 3),
            Err(CodecError::MalformedContainer { .. })
        ));
    }
}
