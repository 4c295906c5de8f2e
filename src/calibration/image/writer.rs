use std::io::Write;

use crate::calibration::common::error::Result;
use crate::calibration::image::grid::Image;

pub trait ImageWriter {
    fn write_image(&self, image: &Image, output: &mut dyn Write) -> Result<()>;
}
