//! RGB raster decomposition into independent byte planes.
//!
//! Each plane is one 8-bit channel in row-major order, width x height bytes.
//! The fixed R, G, B plane order is part of the container contract.

use image::RgbImage;
use planepack_core::error::{CodecError, Result};

/// Number of planes in an RGB raster.
pub const PLANE_COUNT: usize = 3;

/// Split an RGB raster into its R, G and B byte planes.
pub fn split_rgb(image: &RgbImage) -> [Vec<u8>; PLANE_COUNT] {
    let len = (image.width() as usize) * (image.height() as usize);
    let mut red = Vec::with_capacity(len);
    let mut green = Vec::with_capacity(len);
    let mut blue = Vec::with_capacity(len);

    for pixel in image.pixels() {
        red.push(pixel[0]);
        green.push(pixel[1]);
        blue.push(pixel[2]);
    }

    [red, green, blue]
}

/// Reassemble three decoded planes into an RGB raster of the stored
/// dimensions.
///
/// Every plane must hold exactly width x height bytes, else
/// [`CodecError::SizeMismatch`].
pub fn merge_rgb(width: u32, height: u32, planes: &[Vec<u8>; PLANE_COUNT]) -> Result<RgbImage> {
    let expected = usize::try_from(u64::from(width) * u64::from(height))
        .map_err(|_| CodecError::malformed("plane byte count overflows this platform"))?;

    for plane in planes {
        if plane.len() != expected {
            return Err(CodecError::size_mismatch(expected, plane.len()));
        }
    }

    let mut interleaved = Vec::with_capacity(expected * PLANE_COUNT);
    for i in 0..expected {
        interleaved.push(planes[0][i]);
        interleaved.push(planes[1][i]);
        interleaved.push(planes[2][i]);
    }

    RgbImage::from_raw(width, height, interleaved)
        .ok_or_else(|| CodecError::malformed("raster buffer does not match its dimensions"))
}
