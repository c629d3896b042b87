//! TIFF writing module
//!
//! This module writes 32-bit float TIFF files, one strip per row, with
//! various compression options.

mod writer;
mod standard_tiff_writer;
pub mod types;


pub use writer::{RowSource, TiffWriter};
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, ConversionConfig, ConversionConfigBuilder, OutputLayout, Photometric};
