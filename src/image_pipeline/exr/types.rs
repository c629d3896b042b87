//! Decoded EXR image data types

/// One decoded channel of an EXR layer.
#[derive(Debug, Clone)]
pub struct SourceChannel {
    /// Channel name as stored in the file, layer prefixes included
    pub qualified_name: String,
    /// Row-major samples, top row first, `width * height` values
    pub samples: Vec<f32>,
}

impl SourceChannel {
    pub fn new(qualified_name: impl Into<String>, samples: Vec<f32>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            samples,
        }
    }
}

/// Represents one decoded EXR layer: dimensions plus all of its channels
/// in the container's enumeration order.
#[derive(Debug, Clone)]
pub struct ExrImageData {
    /// Width of the layer in pixels
    pub width: usize,
    /// Height of the layer in pixels
    pub height: usize,
    /// Decoded channels, file order
    pub channels: Vec<SourceChannel>,
}

impl ExrImageData {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
