//! The codec seam between the per-plane algorithms and the container layer.

use crate::error::Result;

/// The serialized result of encoding exactly one color plane.
///
/// `aux` holds whatever side information the codec needs to reverse the
/// encoding (the serialized code table for Huffman); codecs that keep their
/// state implicit leave it empty. `data` is the encoded payload itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedPlane {
    /// Auxiliary block required to decode `data` (may be empty).
    pub aux: Vec<u8>,
    /// Encoded payload.
    pub data: Vec<u8>,
}

/// A lossless codec over one byte plane.
///
/// The container layer is written against this trait; each of the three
/// color planes passes through one `encode_plane`/`decode_plane` pair
/// independently, with no state shared between planes.
pub trait PlaneCodec {
    /// Encode one plane into its serialized form.
    ///
    /// A zero-length plane is refused with
    /// [`CodecError::EmptyInput`](crate::CodecError::EmptyInput).
    fn encode_plane(&self, plane: &[u8]) -> Result<EncodedPlane>;

    /// Decode one plane, producing exactly `expected_len` bytes.
    ///
    /// Implementations must verify the decoded length and report a
    /// distinguishable error on any inconsistency rather than returning
    /// plausible-looking data.
    fn decode_plane(&self, encoded: &EncodedPlane, expected_len: usize) -> Result<Vec<u8>>;
}
