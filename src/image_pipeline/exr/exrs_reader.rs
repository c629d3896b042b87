//! EXR reader implementation using the exr library.
//!
//! Decodes the first non-deep layer of an OpenEXR file into per-channel
//! f32 planes. Half-float and unsigned-int channels are converted to f32
//! on the way out, so the rest of the pipeline only ever sees one sample
//! type.

use std::io::Cursor;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::exr::reader::ExrImageReader;
use crate::image_pipeline::exr::types::{ExrImageData, SourceChannel};

/// EXR image reader backed by the exr library.
///
/// Single-part and multi-part files are both accepted; the first valid
/// flat layer is decoded at its largest resolution level. Channel names
/// come out exactly as stored, layer prefixes included, in the file's
/// enumeration order.
pub struct ExrsReader;

impl ExrImageReader for ExrsReader {
    /// Reads and decodes EXR image data from a byte array.
    ///
    /// This method:
    /// 1. Decodes the first valid flat layer using the exr read builder
    /// 2. Converts every channel's samples to f32 (f16 and u32 storage included)
    /// 3. Rejects subsampled channels, which the fixed output layout cannot hold
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the EXR file
    ///
    /// # Returns
    ///
    /// * `Ok(ExrImageData)` - Decoded layer with all of its channels
    /// * `Err(ConversionError)` - The data is not a decodable flat EXR image
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use exr2tiff::image_pipeline::{ExrImageReader, ExrsReader};
    ///
    /// let reader = ExrsReader;
    /// let bytes = std::fs::read("image.exr").unwrap();
    /// let image = reader.read_exr(&bytes).unwrap();
    /// ```
    fn read_exr(&self, data: &[u8]) -> Result<ExrImageData> {
        use exr::prelude::*;

        debug!("Decoding EXR image, {} bytes", data.len());

        let image = read()
            .no_deep_data()
            .largest_resolution_level()
            .all_channels()
            .first_valid_layer()
            .all_attributes()
            .from_buffered(Cursor::new(data))
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let layer = image.layer_data;
        let width = layer.size.width();
        let height = layer.size.height();

        debug!(
            "Decoded layer: {}x{}, {} channels",
            width,
            height,
            layer.channel_data.list.len()
        );

        let mut channels = Vec::with_capacity(layer.channel_data.list.len());
        for channel in &layer.channel_data.list {
            if channel.sampling != Vec2(1, 1) {
                return Err(ConversionError::DecodeError(format!(
                    "channel {} is subsampled ({}x{}), only full-resolution channels are supported",
                    channel.name,
                    channel.sampling.x(),
                    channel.sampling.y()
                )));
            }

            channels.push(SourceChannel::new(
                channel.name.to_string(),
                channel.sample_data.values_as_f32().collect(),
            ));
        }

        Ok(ExrImageData {
            width,
            height,
            channels,
        })
    }
}
