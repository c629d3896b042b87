//! Image processing pipeline module
//!
//! This module provides a structured approach to image format conversions,
//! with separate modules for EXR reading, channel remapping, TIFF writing,
//! and conversion orchestration.

pub mod exr;
pub mod remap;
pub mod tiff;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use exr::{
    ExrImageData,
    ExrImageReader,
    ExrsReader,
    SourceChannel,
};

pub use remap::{
    ChannelAssignment,
    ChannelSlot,
    OutputChannel,
    leaf_name,
    resolve_channels,
};

pub use tiff::{
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    OutputLayout,
    Photometric,
    RowSource,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    ExrToTiffPipeline,
};
