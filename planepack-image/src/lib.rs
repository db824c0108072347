//! # planepack-image
//!
//! Plane splitting, the binary container format, and the file-level
//! compress/decompress API.
//!
//! An RGB raster is decomposed into three independent byte planes (R, G, B)
//! and each plane passes through one codec invocation; the three encoded
//! records land in a dimensions-prefixed container. Raster decoding and
//! encoding is delegated to the [`image`] crate.
//!
//! The three planes share no state, so they are encoded and decoded in
//! parallel with rayon; results are assembled in fixed R, G, B order
//! regardless of completion order.
//!
//! ## Example
//!
//! ```rust
//! use image::RgbImage;
//! use planepack_image::{Algorithm, decode_image, encode_image};
//!
//! let img = RgbImage::from_fn(4, 4, |x, y| image::Rgb([x as u8, y as u8, 0]));
//!
//! let container = encode_image(&img, Algorithm::Huffman).unwrap();
//! let restored = decode_image(&container, Algorithm::Huffman).unwrap();
//!
//! assert_eq!(restored, img);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod container;
mod deflate;
pub mod planes;

pub use container::Container;
pub use deflate::DeflateCodec;
pub use planes::{PLANE_COUNT, merge_rgb, split_rgb};

use image::RgbImage;
use planepack_core::error::CodecError;
use planepack_core::{EncodedPlane, PlaneCodec};
use planepack_huffman::HuffmanCodec;
use planepack_lzw::LzwCodec;
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors from the image-level API.
#[derive(Debug, Error)]
pub enum PackError {
    /// A codec or container failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Raster decode/encode failure from the delegated image library.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the image-level API.
pub type Result<T> = std::result::Result<T, PackError>;

/// The per-plane compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Prefix coding from the plane's byte distribution.
    Huffman,
    /// Incremental dictionary coding with fixed-width codes.
    Lzw,
    /// Passthrough to flate2's zlib (no original algorithmic work).
    Deflate,
}

static HUFFMAN: HuffmanCodec = HuffmanCodec;
static LZW: LzwCodec = LzwCodec;
static DEFLATE: DeflateCodec = DeflateCodec;

impl Algorithm {
    /// The plane codec implementing this algorithm.
    pub fn codec(self) -> &'static (dyn PlaneCodec + Sync) {
        match self {
            Algorithm::Huffman => &HUFFMAN,
            Algorithm::Lzw => &LZW,
            Algorithm::Deflate => &DEFLATE,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Huffman => write!(f, "huffman"),
            Algorithm::Lzw => write!(f, "lzw"),
            Algorithm::Deflate => write!(f, "deflate"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "huffman" => Ok(Algorithm::Huffman),
            "lzw" => Ok(Algorithm::Lzw),
            "deflate" => Ok(Algorithm::Deflate),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// Encode an RGB raster into a container.
///
/// The three planes are encoded in parallel; the container keeps them in
/// R, G, B order.
pub fn encode_image(image: &RgbImage, algorithm: Algorithm) -> Result<Container> {
    let planes = split_rgb(image);
    let codec = algorithm.codec();

    let encoded = planes
        .par_iter()
        .map(|plane| codec.encode_plane(plane))
        .collect::<planepack_core::Result<Vec<EncodedPlane>>>()?;

    let records: [EncodedPlane; PLANE_COUNT] = encoded
        .try_into()
        .expect("three planes in, three records out");

    Ok(Container::new(image.width(), image.height(), records)?)
}

/// Decode a container back into the RGB raster it was built from.
///
/// Every plane is validated against width x height
/// ([`CodecError::SizeMismatch`] otherwise).
pub fn decode_image(container: &Container, algorithm: Algorithm) -> Result<RgbImage> {
    let expected_len = container.plane_len()?;
    let codec = algorithm.codec();

    let decoded = container
        .planes()
        .par_iter()
        .map(|plane| codec.decode_plane(plane, expected_len))
        .collect::<planepack_core::Result<Vec<Vec<u8>>>>()?;

    let planes: [Vec<u8>; PLANE_COUNT] = decoded
        .try_into()
        .expect("three records in, three planes out");

    Ok(merge_rgb(container.width(), container.height(), &planes)?)
}

/// Compress a raster image file into a container file.
///
/// The input may be any format the delegated image library decodes; it is
/// converted to 8-bit RGB first. The container is serialized fully in
/// memory and written in one step, so a failed run leaves no half-written
/// container behind on the happy I/O path.
pub fn compress(input_image: &Path, output_path: &Path, algorithm: Algorithm) -> Result<()> {
    let raster = image::open(input_image)?.to_rgb8();
    let container = encode_image(&raster, algorithm)?;
    fs::write(output_path, container.to_bytes())?;
    Ok(())
}

/// Decompress a container file and write the reconstructed raster.
///
/// The output format follows the output path's extension, as the delegated
/// image library resolves it. The algorithm is supplied by the caller; the
/// container layout carries no algorithm tag.
pub fn decompress(input_path: &Path, output_image: &Path, algorithm: Algorithm) -> Result<()> {
    let raw = fs::read(input_path)?;
    let container = Container::from_bytes(&raw)?;
    let raster = decode_image(&container, algorithm)?;
    raster.save(output_image)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn sample_image() -> RgbImage {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        img.put_pixel(0, 1, Rgb([128, 64, 32]));
        img.put_pixel(1, 1, Rgb([10, 20, 30]));
        img
    }

    #[test]
    fn test_encode_decode_all_algorithms() {
        let img = sample_image();
        for algorithm in [Algorithm::Huffman, Algorithm::Lzw, Algorithm::Deflate] {
            let container = encode_image(&img, algorithm).unwrap();
            let restored = decode_image(&container, algorithm).unwrap();
            assert_eq!(restored, img, "{algorithm} round-trip");
        }
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!(Algorithm::from_str("huffman"), Ok(Algorithm::Huffman));
        assert_eq!(Algorithm::from_str("LZW"), Ok(Algorithm::Lzw));
        assert_eq!(Algorithm::from_str("Deflate"), Ok(Algorithm::Deflate));
        assert!(Algorithm::from_str("zstd").is_err());
    }
}
