//! DEFLATE passthrough codec.
//!
//! This path contributes no original algorithmic work: each plane is handed
//! to flate2's zlib implementation at maximum compression, mirroring how
//! the Huffman and LZW planes flow through the same container.

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use planepack_core::error::{CodecError, Result};
use planepack_core::{EncodedPlane, PlaneCodec};
use std::io::{Read, Write};

/// Zlib passthrough over one color plane.
///
/// Like LZW, the record carries no auxiliary block.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeflateCodec;

impl PlaneCodec for DeflateCodec {
    fn encode_plane(&self, plane: &[u8]) -> Result<EncodedPlane> {
        if plane.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(plane)?;
        let data = encoder.finish()?;

        Ok(EncodedPlane {
            aux: Vec::new(),
            data,
        })
    }

    fn decode_plane(&self, encoded: &EncodedPlane, expected_len: usize) -> Result<Vec<u8>> {
        if !encoded.aux.is_empty() {
            return Err(CodecError::malformed(
                "DEFLATE plane carries a non-empty auxiliary block",
            ));
        }

        let mut decoded = Vec::with_capacity(expected_len);
        ZlibDecoder::new(&encoded.data[..])
            .read_to_end(&mut decoded)
            .map_err(|e| CodecError::malformed(format!("zlib stream is corrupt: {e}")))?;

        if decoded.len() != expected_len {
            return Err(CodecError::size_mismatch(expected_len, decoded.len()));
        }
        Ok(decoded)
    }
}
