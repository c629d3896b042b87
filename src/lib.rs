//! EXR to TIFF conversion library
//!
//! Decodes OpenEXR images, remaps their channels onto a fixed RGBA-ordered
//! output layout, and writes 32-bit float TIFF files.

pub mod image_pipeline;
pub mod logger;
