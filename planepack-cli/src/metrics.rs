//! Quality metrics: simple numeric comparisons over decoded pixel buffers.

use image::RgbImage;

/// Ratio of original to compressed byte counts (higher is better).
pub fn compression_ratio(original_bytes: u64, compressed_bytes: u64) -> f64 {
    if compressed_bytes == 0 {
        return 0.0;
    }
    original_bytes as f64 / compressed_bytes as f64
}

/// Peak signal-to-noise ratio between two rasters, in dB.
///
/// Computed over all three channels. Identical images yield infinity,
/// which is the expected result for a lossless round-trip.
pub fn psnr(original: &RgbImage, reconstructed: &RgbImage) -> f64 {
    assert_eq!(
        original.dimensions(),
        reconstructed.dimensions(),
        "PSNR requires equally sized images"
    );

    let sum_sq: f64 = original
        .as_raw()
        .iter()
        .zip(reconstructed.as_raw())
        .map(|(&a, &b)| {
            let diff = f64::from(a) - f64::from(b);
            diff * diff
        })
        .sum();

    let mse = sum_sq / original.as_raw().len() as f64;
    if mse == 0.0 {
        return f64::INFINITY;
    }

    const PIXEL_MAX: f64 = 255.0;
    20.0 * (PIXEL_MAX / mse.sqrt()).log10()
}
