use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::exr::types::ExrImageData;

pub trait ExrImageReader {
    fn read_exr(&self, data: &[u8]) -> Result<ExrImageData>;
}
