use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::exr::{ExrImageData, ExrImageReader, ExrsReader};
use crate::image_pipeline::remap::{ChannelAssignment, OutputChannel, resolve_channels};
use crate::image_pipeline::tiff::{
    ConversionConfig, OutputLayout, Photometric, RowSource, StandardTiffWriter, TiffWriter,
};

pub struct ExrToTiffPipeline<R: ExrImageReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl ExrToTiffPipeline<ExrsReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ExrsReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: ExrImageReader, W: TiffWriter> ExrToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decode, validate and resolve. Runs strictly before any output
    /// resource exists, so conflicts and decode failures produce nothing.
    fn prepare(&self, input_data: &[u8]) -> Result<(ExrImageData, ChannelAssignment)> {
        let image = {
            let _span = tracing::info_span!("decode_exr").entered();
            self.reader.read_exr(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.width,
                height = image.height
            )
            .entered();
            self.validate_dimensions(image.width, image.height)?;
        }

        let assignment = {
            let _span =
                tracing::info_span!("resolve_channels", channels = image.channels.len()).entered();
            resolve_channels(image.channels.iter().map(|c| c.qualified_name.as_str()))?
        };

        if assignment.is_empty() {
            return Err(ConversionError::NoOutputChannels);
        }

        for (_, index) in assignment.interleave_order() {
            let channel = &image.channels[index];
            if channel.samples.len() != image.pixel_count() {
                return Err(ConversionError::DecodeError(format!(
                    "channel {} has {} samples, expected {}",
                    channel.qualified_name,
                    channel.samples.len(),
                    image.pixel_count()
                )));
            }
        }

        Ok((image, assignment))
    }

    fn transcode(
        &self,
        image: &ExrImageData,
        assignment: &ChannelAssignment,
        output: &mut dyn Write,
    ) -> Result<()> {
        let layout = output_layout(assignment, image.width, image.height)?;
        let mut rows = RowInterleaver::new(image, assignment);

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer
                .write_tiff(&layout, &mut rows, output, &self.config)?;
        }

        info!(
            width = layout.width,
            height = layout.height,
            channels = layout.samples_per_pixel,
            normals = assignment.convert_normals(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting EXR to TIFF conversion");

        let (image, assignment) = self.prepare(input_data)?;
        self.transcode(&image, &assignment, output)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let (image, assignment) = self.prepare(&input_data)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.transcode(&image, &assignment, &mut output_file)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Output shape for an assignment: sample count, alpha tagging, and the
/// photometric rule (RGB exactly when three color samples are present).
pub(crate) fn output_layout(
    assignment: &ChannelAssignment,
    width: usize,
    height: usize,
) -> Result<OutputLayout> {
    let samples_per_pixel = assignment.samples_per_pixel();
    let has_alpha = assignment.has_alpha();
    let color_samples = samples_per_pixel - has_alpha as usize;

    let photometric = if color_samples == 3 {
        Photometric::Rgb
    } else {
        Photometric::BlackIsZero
    };

    let width_px =
        u32::try_from(width).map_err(|_| ConversionError::InvalidDimensions(width, height))?;
    let height_px =
        u32::try_from(height).map_err(|_| ConversionError::InvalidDimensions(width, height))?;

    Ok(OutputLayout {
        width: width_px,
        height: height_px,
        samples_per_pixel,
        photometric,
        has_alpha,
    })
}

/// Streams interleaved scanlines out of the per-channel planes selected
/// by an assignment, applying the normals remap to non-alpha samples.
pub(crate) struct RowInterleaver<'a> {
    planes: Vec<&'a [f32]>,
    width: usize,
    convert_normals: bool,
    alpha_position: Option<usize>,
}

impl<'a> RowInterleaver<'a> {
    pub(crate) fn new(image: &'a ExrImageData, assignment: &ChannelAssignment) -> Self {
        let order = assignment.interleave_order();
        let planes = order
            .iter()
            .map(|&(_, index)| image.channels[index].samples.as_slice())
            .collect();
        let alpha_position = order
            .iter()
            .position(|&(slot, _)| slot == OutputChannel::Alpha);

        Self {
            planes,
            width: image.width,
            convert_normals: assignment.convert_normals(),
            alpha_position,
        }
    }
}

impl RowSource for RowInterleaver<'_> {
    fn fill_row(&mut self, y: u32, row: &mut [f32]) {
        let channels = self.planes.len();
        let base = y as usize * self.width;

        for (i, plane) in self.planes.iter().enumerate() {
            let remap = self.convert_normals && self.alpha_position != Some(i);
            for x in 0..self.width {
                let value = plane[base + x];
                row[x * channels + i] = if remap { value / 2.0 + 0.5 } else { value };
            }
        }
    }
}
