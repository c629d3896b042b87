//! Pipeline conversions module
//!
//! This module contains orchestration logic for image format conversions.

mod exr_to_tiff;


pub use exr_to_tiff::ExrToTiffPipeline;
