//! The on-disk container layout.
//!
//! ```text
//! u32 (LE)  width
//! u32 (LE)  height
//! then, per plane in fixed R, G, B order:
//!   u32 (LE)  aux length
//!   ...       aux bytes (serialized code table for Huffman, empty for LZW)
//!   u32 (LE)  data length
//!   ...       encoded payload
//! ```
//!
//! All integers are little-endian. A container is never partially valid:
//! the reader validates the header and every length prefix against the
//! actual data, and refuses trailing garbage.

use crate::planes::PLANE_COUNT;
use planepack_core::error::{CodecError, Result};
use planepack_core::EncodedPlane;
use std::io::{Read, Write};

/// An encoded RGB image: dimensions plus three per-plane records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    width: u32,
    height: u32,
    planes: [EncodedPlane; PLANE_COUNT],
}

impl Container {
    /// Assemble a container. Dimensions must be positive.
    pub fn new(width: u32, height: u32, planes: [EncodedPlane; PLANE_COUNT]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CodecError::malformed(format!(
                "zero image dimension ({width}x{height})"
            )));
        }
        Ok(Self {
            width,
            height,
            planes,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The three per-plane records in R, G, B order.
    pub fn planes(&self) -> &[EncodedPlane; PLANE_COUNT] {
        &self.planes
    }

    /// Byte count of one decoded plane (width x height).
    pub fn plane_len(&self) -> Result<usize> {
        usize::try_from(u64::from(self.width) * u64::from(self.height))
            .map_err(|_| CodecError::malformed("plane byte count overflows this platform"))
    }

    /// Write the container in its serialized layout.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.width.to_le_bytes())?;
        writer.write_all(&self.height.to_le_bytes())?;

        for plane in &self.planes {
            write_block(writer, &plane.aux)?;
            write_block(writer, &plane.data)?;
        }

        Ok(())
    }

    /// Serialize into a byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let payload: usize = self
            .planes
            .iter()
            .map(|p| 8 + p.aux.len() + p.data.len())
            .sum();
        let mut out = Vec::with_capacity(8 + payload);
        self.write_to(&mut out)
            .expect("writing to a Vec cannot fail");
        out
    }

    /// Read a container, validating every declared length against the
    /// actual data. The stream must end exactly at the last plane record.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let width = read_u32(reader, "width")?;
        let height = read_u32(reader, "height")?;
        if width == 0 || height == 0 {
            return Err(CodecError::malformed(format!(
                "zero image dimension ({width}x{height})"
            )));
        }

        let mut planes: [EncodedPlane; PLANE_COUNT] = Default::default();
        for (index, plane) in planes.iter_mut().enumerate() {
            let aux_len = read_u32(reader, "aux length")?;
            plane.aux = read_block(reader, aux_len, index, "aux")?;
            let data_len = read_u32(reader, "data length")?;
            plane.data = read_block(reader, data_len, index, "data")?;
        }

        let mut probe = [0u8; 1];
        if reader.read(&mut probe)? != 0 {
            return Err(CodecError::malformed(
                "trailing bytes after the last plane record",
            ));
        }

        Ok(Self {
            width,
            height,
            planes,
        })
    }

    /// Parse a serialized container.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Self::read_from(&mut &raw[..])
    }
}

fn write_block<W: Write>(writer: &mut W, block: &[u8]) -> Result<()> {
    let len = u32::try_from(block.len())
        .map_err(|_| CodecError::malformed("plane record exceeds the u32 length prefix"))?;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(block)?;
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R, what: &str) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|_| CodecError::malformed(format!("file ends inside the {what} field")))?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a length-prefixed block without trusting the declared length for
/// the allocation: a corrupt prefix must fail cleanly, not reserve 4 GiB.
fn read_block<R: Read>(reader: &mut R, len: u32, plane: usize, what: &str) -> Result<Vec<u8>> {
    let mut block = Vec::new();
    reader
        .by_ref()
        .take(u64::from(len))
        .read_to_end(&mut block)?;

    if block.len() != len as usize {
        return Err(CodecError::malformed(format!(
            "plane {plane} declares {len} {what} bytes but only {} are present",
            block.len()
        )));
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_container() -> Container {
        Container::new(
            2,
            2,
            [
                EncodedPlane {
                    aux: vec![1, 2, 3],
                    data: vec![4, 5],
                },
                EncodedPlane {
                    aux: vec![],
                    data: vec![6],
                },
                EncodedPlane {
                    aux: vec![7],
                    data: vec![],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_layout() {
        let raw = sample_container().to_bytes();
        #[rustfmt::skip]
        assert_eq!(raw, vec![
            2, 0, 0, 0,          // width
            2, 0, 0, 0,          // height
            3, 0, 0, 0, 1, 2, 3, // plane 0 aux
            2, 0, 0, 0, 4, 5,    // plane 0 data
            0, 0, 0, 0,          // plane 1 aux (empty)
            1, 0, 0, 0, 6,       // plane 1 data
            1, 0, 0, 0, 7,       // plane 2 aux
            0, 0, 0, 0,          // plane 2 data (empty)
        ]);
    }

    #[test]
    fn test_roundtrip() {
        let container = sample_container();
        let raw = container.to_bytes();
        assert_eq!(Container::from_bytes(&raw).unwrap(), container);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Container::new(0, 4, Default::default()).is_err());

        let mut raw = sample_container().to_bytes();
        raw[4..8].copy_from_slice(&[0; 4]);
        assert!(matches!(
            Container::from_bytes(&raw),
            Err(CodecError::MalformedContainer { .. })
        ));
    }

    #[test]
    fn test_truncation_rejected() {
        let raw = sample_container().to_bytes();
        for cut in [0, 4, 8, 11, raw.len() - 1] {
            assert!(
                matches!(
                    Container::from_bytes(&raw[..cut]),
                    Err(CodecError::MalformedContainer { .. })
                ),
                "truncation at {cut} must be rejected"
            );
        }
    }

    #[test]
    fn test_overlong_length_prefix_rejected() {
        let mut raw = sample_container().to_bytes();
        // Inflate the first aux length far past the file end.
        raw[8..12].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            Container::from_bytes(&raw),
            Err(CodecError::MalformedContainer { .. })
        ));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let mut raw = sample_container().to_bytes();
        raw.push(0xFF);
        assert!(matches!(
            Container::from_bytes(&raw),
            Err(CodecError::MalformedContainer { .. })
        ));
    }

    #[test]
    fn test_plane_len() {
        assert_eq!(sample_container().plane_len().unwrap(), 4);
    }
}
