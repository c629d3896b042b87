//! EXR image reading module
//!
//! Decodes OpenEXR input into named f32 channel planes, hiding the format
//! details (deep data, resolution levels, sample types) from the rest of
//! the pipeline.

mod exrs_reader;
mod reader;
pub mod types;

pub use exrs_reader::ExrsReader;
pub use reader::ExrImageReader;
pub use types::{ExrImageData, SourceChannel};
