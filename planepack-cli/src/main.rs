//! planepack CLI - per-plane lossless image compression.
//!
//! Compresses RGB raster images with Huffman or LZW coding (one codec pass
//! per color plane) into the planepack container format, and reconstructs
//! them exactly.

mod commands;
mod metrics;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_test};
use planepack_image::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planepack")]
#[command(
    author,
    version,
    about = "Per-plane lossless image compression (Huffman, LZW)"
)]
#[command(long_about = "
planepack splits an RGB image into its three color planes and compresses
each plane independently with the selected codec. Compression is lossless:
decompression reproduces the original pixels exactly.

The container format carries no algorithm tag, so decompression takes the
same --algorithm that produced the file.

Examples:
  planepack compress photo.png photo.ppk
  planepack compress photo.png photo.ppk --algorithm lzw
  planepack decompress photo.ppk restored.png --algorithm lzw
  planepack info photo.ppk
  planepack info photo.ppk --json
  planepack test photo.png --algorithm huffman
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a raster image into a planepack container
    #[command(alias = "c")]
    Compress {
        /// Input image (PNG, BMP, JPEG, TIFF, ...)
        image: PathBuf,

        /// Output container file
        output: PathBuf,

        /// Compression algorithm
        #[arg(short, long, value_enum, default_value = "huffman")]
        algorithm: AlgorithmArg,

        /// Show size report
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a planepack container back into a raster image
    #[command(alias = "d")]
    Decompress {
        /// Input container file
        input: PathBuf,

        /// Output image; the format follows the extension
        output: PathBuf,

        /// Algorithm the container was compressed with
        #[arg(short, long, value_enum, default_value = "huffman")]
        algorithm: AlgorithmArg,

        /// Show size report
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a planepack container
    #[command(alias = "i")]
    Info {
        /// Container file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Round-trip an image in memory and report quality metrics
    #[command(alias = "t")]
    Test {
        /// Image to test
        image: PathBuf,

        /// Compression algorithm
        #[arg(short, long, value_enum, default_value = "huffman")]
        algorithm: AlgorithmArg,
    },
}

/// Compression algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Huffman prefix coding per plane
    Huffman,
    /// LZW dictionary coding per plane
    Lzw,
    /// DEFLATE passthrough (zlib)
    Deflate,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Huffman => Algorithm::Huffman,
            AlgorithmArg::Lzw => Algorithm::Lzw,
            AlgorithmArg::Deflate => Algorithm::Deflate,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            image,
            output,
            algorithm,
            verbose,
        } => cmd_compress(&image, &output, algorithm.into(), verbose),
        Commands::Decompress {
            input,
            output,
            algorithm,
            verbose,
        } => cmd_decompress(&input, &output, algorithm.into(), verbose),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Test { image, algorithm } => cmd_test(&image, algorithm.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
