//! PNG export using the `png` crate.
//!
//! The grid is emitted as 16-bit RGB with network byte order samples, the
//! layout downstream tooling expects from the original capture scripts.

use std::io::Write;

use tracing::debug;

use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::image::grid::Image;
use crate::calibration::image::writer::ImageWriter;

pub struct PngWriter;

impl ImageWriter for PngWriter {
    fn write_image(&self, image: &Image, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let mut encoder = png::Encoder::new(output, image.width() as u32, image.height() as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Sixteen);

        let mut writer = encoder
            .write_header()
            .map_err(|e| CalibrationError::EncodeError(e.to_string()))?;

        // 16-bit samples are big-endian per the PNG spec.
        let mut data = Vec::with_capacity(image.width() * image.height() * 6);
        for row in image.rows() {
            for pixel in row {
                data.extend_from_slice(&(pixel.r() as u16).to_be_bytes());
                data.extend_from_slice(&(pixel.g() as u16).to_be_bytes());
                data.extend_from_slice(&(pixel.b() as u16).to_be_bytes());
            }
        }

        writer
            .write_image_data(&data)
            .map_err(|e| CalibrationError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
