use std::io::{Cursor, Seek, Write};

use tracing::debug;

use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::{PhotometricInterpretation, SampleFormat, Tag};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::tiff::types::{
    ConversionConfig, OutputLayout, Photometric, TiffCompression,
};
use crate::image_pipeline::tiff::writer::{RowSource, TiffWriter};

/// ExtraSamples tag value for associated (premultiplied) alpha.
const EXTRASAMPLE_ASSOCIATED_ALPHA: u16 = 1;

/// Orientation tag value for row 0 at the top, column 0 at the left.
const ORIENTATION_TOPLEFT: u16 = 1;

/// Two f32 samples per pixel, black-is-zero: one intensity channel plus
/// either alpha or a second unlabelled channel. The upstream colortype
/// list stops at single-sample gray for floats.
struct Gray32FloatPair;

impl ColorType for Gray32FloatPair {
    type Inner = f32;
    const TIFF_VALUE: PhotometricInterpretation = PhotometricInterpretation::BlackIsZero;
    const BITS_PER_SAMPLE: &'static [u16] = &[32; 2];
    const SAMPLE_FORMAT: &'static [SampleFormat] = &[SampleFormat::IEEEFP; 2];

    fn horizontal_predict(_: &[Self::Inner], _: &mut Vec<Self::Inner>) {
        unreachable!()
    }
}

/// Three f32 samples per pixel, black-is-zero: two intensity channels
/// plus alpha.
struct Gray32FloatTriple;

impl ColorType for Gray32FloatTriple {
    type Inner = f32;
    const TIFF_VALUE: PhotometricInterpretation = PhotometricInterpretation::BlackIsZero;
    const BITS_PER_SAMPLE: &'static [u16] = &[32; 3];
    const SAMPLE_FORMAT: &'static [SampleFormat] = &[SampleFormat::IEEEFP; 3];

    fn horizontal_predict(_: &[Self::Inner], _: &mut Vec<Self::Inner>) {
        unreachable!()
    }
}

pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(
        &self,
        layout: &OutputLayout,
        rows: &mut dyn RowSource,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!(
            "Encoding TIFF image: {}x{}, {} samples per pixel",
            layout.width, layout.height, layout.samples_per_pixel
        );

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::Packbits => Compression::Packbits,
        };

        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        match (layout.samples_per_pixel, layout.photometric) {
            (1, Photometric::BlackIsZero) => {
                write_strips::<colortype::Gray32Float, _>(&mut encoder, layout, rows)
            }
            (2, Photometric::BlackIsZero) => {
                write_strips::<Gray32FloatPair, _>(&mut encoder, layout, rows)
            }
            (3, Photometric::Rgb) => {
                write_strips::<colortype::RGB32Float, _>(&mut encoder, layout, rows)
            }
            (3, Photometric::BlackIsZero) => {
                write_strips::<Gray32FloatTriple, _>(&mut encoder, layout, rows)
            }
            (4, Photometric::Rgb) => {
                write_strips::<colortype::RGBA32Float, _>(&mut encoder, layout, rows)
            }
            (samples, photometric) => Err(ConversionError::EncodeError(format!(
                "no TIFF sample layout for {samples} samples per pixel as {photometric:?}"
            ))),
        }?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

/// Writes the image as one strip per row, in order, plus the fixed tag
/// set (top-left orientation, associated alpha when present).
fn write_strips<C, W>(
    encoder: &mut TiffEncoder<W>,
    layout: &OutputLayout,
    rows: &mut dyn RowSource,
) -> Result<()>
where
    C: ColorType<Inner = f32>,
    W: Write + Seek,
{
    let mut image = encoder
        .new_image::<C>(layout.width, layout.height)
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

    image
        .rows_per_strip(1)
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

    image
        .encoder()
        .write_tag(Tag::Orientation, ORIENTATION_TOPLEFT)
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

    if layout.has_alpha {
        image
            .encoder()
            .write_tag(Tag::ExtraSamples, &[EXTRASAMPLE_ASSOCIATED_ALPHA][..])
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
    }

    // write_strip skips the encoder's configured compressor, so the
    // whole raster goes through write_data, which compresses strip by
    // strip and finishes the directory.
    let row_len = layout.width as usize * layout.samples_per_pixel;
    let mut samples = vec![1.0f32; row_len * layout.height as usize];
    for y in 0..layout.height {
        let start = y as usize * row_len;
        rows.fill_row(y, &mut samples[start..start + row_len]);
    }

    image
        .write_data(&samples)
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

    Ok(())
}
