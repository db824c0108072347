//! Decompress command implementation.

use planepack_image::Algorithm;
use std::fs;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    algorithm: Algorithm,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    planepack_image::decompress(input, output, algorithm)?;

    if verbose {
        let packed = fs::metadata(input)?.len();
        let restored = fs::metadata(output)?.len();

        println!("{} -> {}", input.display(), output.display());
        println!("  Algorithm: {}", algorithm);
        println!("  Container: {} bytes", packed);
        println!("  Restored image file: {} bytes", restored);
    }

    Ok(())
}
