//! LZW decompression of one plane.

use crate::dictionary::DecodeDictionary;
use planepack_core::error::{CodecError, Result};

/// Decompress a code sequence back into plane bytes.
///
/// The mirror dictionary starts at the 256 single-byte entries and is grown
/// one entry per consumed code, reconstructing the encoder's dictionary
/// without it ever being transmitted. A code equal to the next code to be
/// assigned references the entry the encoder had not yet stored when it
/// emitted the code; it is synthesized as previous + previous's first byte.
/// Any other unknown code is [`CodecError::InvalidCode`] and fatal for the
/// plane.
pub fn decompress_plane(codes: &[u32]) -> Result<Vec<u8>> {
    let (&first, rest) = codes.split_first().ok_or(CodecError::EmptyInput)?;

    let mut dict = DecodeDictionary::new();

    // The first code precedes any dictionary growth, so it must be a seeded
    // single-byte entry.
    let mut previous: Vec<u8> = dict
        .get(first)
        .ok_or(CodecError::InvalidCode(first))?
        .to_vec();
    let mut output = previous.clone();

    for &code in rest {
        let current: Vec<u8> = match dict.get(code) {
            Some(entry) => entry.to_vec(),
            None if code == dict.next_code() => {
                let mut synthesized = previous.clone();
                synthesized.push(previous[0]);
                synthesized
            }
            None => return Err(CodecError::InvalidCode(code)),
        };

        output.extend_from_slice(&current);

        let mut next_entry = previous;
        next_entry.push(current[0]);
        dict.push(next_entry);

        previous = current;
    }

    Ok(output)
}

/// Parse a fixed-width little-endian u32 code stream.
///
/// A payload length that is not a multiple of four cannot be a code
/// sequence.
pub fn bytes_to_codes(raw: &[u8]) -> Result<Vec<u32>> {
    if raw.len() % 4 != 0 {
        return Err(CodecError::malformed(format!(
            "LZW payload length {} is not a multiple of 4",
            raw.len()
        )));
    }

    Ok(raw
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().expect("chunks_exact yields 4 bytes")))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::compress_plane;

    #[test]
    fn test_empty_codes_refused() {
        assert!(matches!(decompress_plane(&[]), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn test_known_sequence() {
        // Mirror of the encoder's "ABABAB" sequence.
        let decoded = decompress_plane(&[65, 66, 256, 256]).unwrap();
        assert_eq!(decoded, b"ABABAB");
    }

    #[test]
    fn test_next_code_synthesis() {
        // "AAA" compresses to [65, 256] where 256 is consumed before the
        // decoder has stored it: the cSc case.
        let codes = compress_plane(b"AAA").unwrap();
        assert_eq!(codes, vec![65, 256]);
        assert_eq!(decompress_plane(&codes).unwrap(), b"AAA");
    }

    #[test]
    fn test_invalid_first_code() {
        let err = decompress_plane(&[256]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidCode(256)));
    }

    #[test]
    fn test_code_beyond_next_is_invalid() {
        // After one code the next assignable is 256, so 300 is out of range.
        let err = decompress_plane(&[65, 300]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidCode(300)));
    }

    #[test]
    fn test_bytes_to_codes_rejects_ragged_payload() {
        assert!(matches!(
            bytes_to_codes(&[1, 2, 3]),
            Err(CodecError::MalformedContainer { .. })
        ));
        assert_eq!(bytes_to_codes(&[]).unwrap(), Vec::<u32>::new());
    }
}
