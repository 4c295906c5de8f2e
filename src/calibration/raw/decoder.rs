use crate::calibration::common::error::Result;
use crate::calibration::image::Image;

pub trait RawDecoder {
    fn decode(&self, data: &[u8]) -> Result<Image>;
}
