//! LZW compression of one plane.

use crate::dictionary::EncodeDictionary;
use planepack_core::error::{CodecError, Result};

/// Compress one plane into its code sequence.
///
/// Scans left to right, extending the current run while the extension is
/// still in the dictionary. On a miss: emit the code for the run so far,
/// register the extended run under the next code, and restart from the byte
/// that caused the miss. The residual run is emitted at end of input.
pub fn compress_plane(plane: &[u8]) -> Result<Vec<u32>> {
    if plane.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut dict = EncodeDictionary::new();
    let mut codes = Vec::new();
    let mut current = vec![plane[0]];

    for &byte in &plane[1..] {
        let mut candidate = current.clone();
        candidate.push(byte);

        if dict.contains(&candidate) {
            current = candidate;
        } else {
            let code = dict
                .code_of(&current)
                .expect("BUG: current run was either seeded or matched in a previous iteration");
            codes.push(code);
            dict.insert(candidate);

            current.clear();
            current.push(byte);
        }
    }

    // The scan always leaves a non-empty residual run.
    let code = dict
        .code_of(&current)
        .expect("BUG: residual run was either seeded or matched in a previous iteration");
    codes.push(code);

    Ok(codes)
}

/// Serialize a code sequence as fixed-width little-endian u32 values.
///
/// Fixed 32-bit codes are deliberately not space-efficient; they keep the
/// decoder free of any bit-width bookkeeping. A code is bounded by
/// 256 + plane length, so it always fits.
pub fn codes_to_bytes(codes: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 4);
    for &code in codes {
        out.extend_from_slice(&code.to_le_bytes());
    }
    out
}
