use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use exr2tiff::image_pipeline::{ConversionConfig, ExrToTiffPipeline, TiffCompression};
use exr2tiff::logger;

/// Convert an OpenEXR image to a 32-bit float TIFF.
///
/// Channels are picked by the leaf of their name: R, G, B and A land in
/// the matching slot, Y and Z broadcast to gray, and NX/NY/NZ become RGB
/// with the values rescaled from [-1, 1] to [0, 1].
#[derive(Parser, Debug)]
#[command(name = "exr2tiff", version)]
struct Cli {
    /// Input EXR file.
    input: PathBuf,

    /// Output TIFF file.
    output: PathBuf,

    /// TIFF compression.
    #[arg(long, value_enum, default_value_t = CompressionChoice::Lzw)]
    compression: CompressionChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompressionChoice {
    None,
    Lzw,
    Deflate,
    Packbits,
}

impl From<CompressionChoice> for TiffCompression {
    fn from(choice: CompressionChoice) -> Self {
        match choice {
            CompressionChoice::None => TiffCompression::None,
            CompressionChoice::Lzw => TiffCompression::Lzw,
            CompressionChoice::Deflate => TiffCompression::Deflate,
            CompressionChoice::Packbits => TiffCompression::Packbits,
        }
    }
}

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();

    let config = ConversionConfig::builder()
        .compression(cli.compression.into())
        .build();
    let pipeline = ExrToTiffPipeline::new(config);

    info!("Compression: {:?}", pipeline.config().compression);

    match pipeline.convert_file(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
