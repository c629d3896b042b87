use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff::types::{ConversionConfig, OutputLayout};

/// Produces interleaved scanlines, top row first.
///
/// `fill_row` overwrites `row` with the samples of scanline `y`; the
/// slice holds `width * samples_per_pixel` values.
pub trait RowSource {
    fn fill_row(&mut self, y: u32, row: &mut [f32]);
}

pub trait TiffWriter {
    fn write_tiff(
        &self,
        layout: &OutputLayout,
        rows: &mut dyn RowSource,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
