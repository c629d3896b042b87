//! TIFF conversion configuration and layout types

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (lossless, read by every DCC tool; the default)
    Lzw,
    /// Deflate compression (lossless; Maya does not read deflate TIFFs)
    Deflate,
    /// PackBits run-length compression (lossless, weak on float data)
    Packbits,
}

/// Photometric interpretation of the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Photometric {
    /// Single-intensity data, zero is black
    BlackIsZero,
    /// Three color samples in R, G, B order
    Rgb,
}

/// Shape of the raster handed to a TIFF writer: dimensions, interleaved
/// sample count, and how the samples are to be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Interleaved samples per pixel (1 to 4)
    pub samples_per_pixel: usize,
    /// Photometric interpretation tag value
    pub photometric: Photometric,
    /// Whether the last sample is associated alpha
    pub has_alpha: bool,
}

/// Configuration for EXR to TIFF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::Lzw,
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
