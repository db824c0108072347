//! Plane-level Huffman encode/decode and the [`PlaneCodec`] implementation.

use crate::codes::{Code, CodeTable};
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;
use planepack_core::bitio::{BitStream, BitWriter};
use planepack_core::error::{CodecError, Result};
use planepack_core::{EncodedPlane, PlaneCodec};
use std::collections::HashMap;

/// Encode one plane against a code table.
///
/// Per-byte codes are concatenated in input order and packed MSB-first. The
/// table is normally the one built from this very plane; a foreign table
/// missing a symbol yields [`CodecError::NoMatchingCode`] rather than a
/// panic.
pub fn encode_plane(plane: &[u8], table: &CodeTable) -> Result<BitStream> {
    if plane.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut writer = BitWriter::with_capacity(plane.len() / 2);
    for &byte in plane {
        let code = table
            .get(byte)
            .ok_or_else(|| CodecError::no_matching_code(writer.bits_written()))?;
        writer.write_bits(code.bits, code.len);
    }

    Ok(writer.finish())
}

/// Decode one plane, emitting exactly `expected_len` bytes.
///
/// Walks the stream bit by bit, accumulating a candidate code and emitting a
/// symbol whenever the candidate matches a table entry. Decoding stops after
/// `expected_len` symbols rather than at stream end: the trailing padding
/// could otherwise spuriously match a short code. Running out of meaningful
/// bits mid-symbol, or growing the candidate past the longest code in the
/// table, is a desynchronized stream.
pub fn decode_plane(stream: &BitStream, table: &CodeTable, expected_len: usize) -> Result<Vec<u8>> {
    if expected_len == 0 {
        return Err(CodecError::EmptyInput);
    }

    // Inverse mapping: (code bits, code length) -> symbol.
    let inverse: HashMap<(u64, u8), u8> = table
        .iter()
        .map(|(symbol, Code { bits, len })| ((bits, len), symbol))
        .collect();
    let max_len = table.max_code_len();

    let mut reader = stream.reader();
    let mut output = Vec::with_capacity(expected_len);

    while output.len() < expected_len {
        let mut candidate = 0u64;
        let mut candidate_len = 0u8;

        loop {
            let bit = reader
                .read_bit()
                .ok_or_else(|| CodecError::no_matching_code(reader.bits_read()))?;
            candidate = (candidate << 1) | u64::from(bit);
            candidate_len += 1;

            if let Some(&symbol) = inverse.get(&(candidate, candidate_len)) {
                output.push(symbol);
                break;
            }
            if candidate_len >= max_len {
                return Err(CodecError::no_matching_code(reader.bits_read()));
            }
        }
    }

    Ok(output)
}

/// Huffman codec over one color plane.
///
/// The encoded record carries the serialized [`CodeTable`] in `aux` and the
/// padded bit stream in `data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl PlaneCodec for HuffmanCodec {
    fn encode_plane(&self, plane: &[u8]) -> Result<EncodedPlane> {
        let freq = FrequencyTable::from_bytes(plane);
        let tree = HuffmanTree::from_frequencies(&freq)?;
        let table = CodeTable::from_tree(&tree);
        let stream = encode_plane(plane, &table)?;

        Ok(EncodedPlane {
            aux: table.to_bytes(),
            data: stream.to_bytes(),
        })
    }

    fn decode_plane(&self, encoded: &EncodedPlane, expected_len: usize) -> Result<Vec<u8>> {
        let table = CodeTable::from_bytes(&encoded.aux)?;
        let stream = BitStream::from_bytes(&encoded.data)?;
        let decoded = decode_plane(&stream, &table, expected_len)?;

        if decoded.len() != expected_len {
            return Err(CodecError::size_mismatch(expected_len, decoded.len()));
        }
        Ok(decoded)
    }
}
