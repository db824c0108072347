//! End-to-end container tests: raster in, container out, raster back.

use image::{Rgb, RgbImage};
use planepack_core::{CodecError, EncodedPlane};
use planepack_image::{
    Algorithm, Container, compress, decode_image, decompress, encode_image,
};

/// The reference 2x2 image with known pixel values.
fn sample_image() -> RgbImage {
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([0, 0, 0]));
    img.put_pixel(1, 0, Rgb([255, 255, 255]));
    img.put_pixel(0, 1, Rgb([128, 64, 32]));
    img.put_pixel(1, 1, Rgb([10, 20, 30]));
    img
}

fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
    })
}

#[test]
fn test_known_pixels_roundtrip_all_algorithms() {
    let img = sample_image();
    for algorithm in [Algorithm::Huffman, Algorithm::Lzw, Algorithm::Deflate] {
        let container = encode_image(&img, algorithm).unwrap();
        let restored = decode_image(&container, algorithm).unwrap();

        assert_eq!(restored.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(restored.get_pixel(1, 0), &Rgb([255, 255, 255]));
        assert_eq!(restored.get_pixel(0, 1), &Rgb([128, 64, 32]));
        assert_eq!(restored.get_pixel(1, 1), &Rgb([10, 20, 30]));
    }
}

#[test]
fn test_single_pixel_roundtrip() {
    let mut img = RgbImage::new(1, 1);
    img.put_pixel(0, 0, Rgb([200, 100, 50]));

    for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
        let container = encode_image(&img, algorithm).unwrap();
        assert_eq!(decode_image(&container, algorithm).unwrap(), img);
    }
}

#[test]
fn test_larger_image_roundtrip() {
    let img = gradient_image(64, 48);
    for algorithm in [Algorithm::Huffman, Algorithm::Lzw, Algorithm::Deflate] {
        let container = encode_image(&img, algorithm).unwrap();
        assert_eq!(decode_image(&container, algorithm).unwrap(), img);
    }
}

#[test]
fn test_serialized_container_roundtrip() {
    let img = gradient_image(16, 16);
    let container = encode_image(&img, Algorithm::Huffman).unwrap();

    let raw = container.to_bytes();
    let parsed = Container::from_bytes(&raw).unwrap();
    assert_eq!(parsed, container);
    assert_eq!(decode_image(&parsed, Algorithm::Huffman).unwrap(), img);
}

#[test]
fn test_lzw_aux_blocks_are_empty() {
    let container = encode_image(&sample_image(), Algorithm::Lzw).unwrap();
    assert!(container.planes().iter().all(|p| p.aux.is_empty()));
}

#[test]
fn test_huffman_aux_blocks_are_present() {
    let container = encode_image(&sample_image(), Algorithm::Huffman).unwrap();
    assert!(container.planes().iter().all(|p| !p.aux.is_empty()));
}

#[test]
fn test_mismatched_dimensions_fail() {
    // A container whose planes decode to fewer bytes than width x height.
    let img = sample_image();
    let small = encode_image(&img, Algorithm::Lzw).unwrap();
    let forged = Container::new(3, 3, small.planes().clone()).unwrap();

    let err = decode_image(&forged, Algorithm::Lzw).unwrap_err();
    assert!(err.to_string().contains("mismatch"));
}

#[test]
fn test_corrupted_huffman_payload_never_passes_silently() {
    let img = gradient_image(32, 32);
    let container = encode_image(&img, Algorithm::Huffman).unwrap();

    let mut planes = container.planes().clone();
    let mid = planes[1].data.len() / 2;
    planes[1].data[mid] ^= 0x55;
    let corrupted = Container::new(32, 32, planes).unwrap();

    match decode_image(&corrupted, Algorithm::Huffman) {
        Err(_) => {}
        Ok(decoded) => assert_ne!(decoded, img, "corruption must not decode to the original"),
    }
}

#[test]
fn test_empty_payload_plane_is_flagged() {
    let empty = EncodedPlane::default();
    let container = Container::new(2, 2, [empty.clone(), empty.clone(), empty]).unwrap();

    assert!(decode_image(&container, Algorithm::Lzw).is_err());
    assert!(decode_image(&container, Algorithm::Huffman).is_err());
}

#[test]
fn test_file_api_roundtrip() {
    let dir = std::env::temp_dir();
    let pid = std::process::id();
    let input = dir.join(format!("planepack_in_{pid}.png"));
    let packed = dir.join(format!("planepack_packed_{pid}.bin"));
    let output = dir.join(format!("planepack_out_{pid}.png"));

    let img = gradient_image(24, 24);
    img.save(&input).unwrap();

    compress(&input, &packed, Algorithm::Lzw).unwrap();
    decompress(&packed, &output, Algorithm::Lzw).unwrap();

    let restored = image::open(&output).unwrap().to_rgb8();
    assert_eq!(restored, img);

    for path in [&input, &packed, &output] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn test_decompress_rejects_malformed_file() {
    let dir = std::env::temp_dir();
    let pid = std::process::id();
    let bad = dir.join(format!("planepack_bad_{pid}.bin"));
    std::fs::write(&bad, [1, 0, 0, 0, 1, 0]).unwrap();

    let out = dir.join(format!("planepack_bad_out_{pid}.png"));
    let err = decompress(&bad, &out, Algorithm::Huffman).unwrap_err();
    assert!(matches!(
        err,
        planepack_image::PackError::Codec(CodecError::MalformedContainer { .. })
    ));

    let _ = std::fs::remove_file(&bad);
}
