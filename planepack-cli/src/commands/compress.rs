//! Compress command implementation.

use crate::metrics::compression_ratio;
use planepack_image::Algorithm;
use std::fs;
use std::path::Path;

pub fn cmd_compress(
    image: &Path,
    output: &Path,
    algorithm: Algorithm,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    planepack_image::compress(image, output, algorithm)?;

    if verbose {
        let original = fs::metadata(image)?.len();
        let packed = fs::metadata(output)?.len();

        println!("{} -> {}", image.display(), output.display());
        println!("  Algorithm: {}", algorithm);
        println!("  Input file: {} bytes", original);
        println!("  Container: {} bytes", packed);
        println!(
            "  Compression rate: {:.2}",
            compression_ratio(original, packed)
        );
    }

    Ok(())
}
