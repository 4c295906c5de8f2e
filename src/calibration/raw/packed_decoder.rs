//! Packed 10-bit raw decoder.
//!
//! Every 5 bytes hold 4 samples: 4 high bytes (8 MSBs each) followed by one
//! shared low byte carrying the 2 LSBs of each sample. Samples are shifted
//! into the 16-bit channel range after reassembly. Each 2x2 quad of samples
//! collapses to one RGB pixel; the channel assignment is specific to this
//! sensor's Bayer layout.

use tracing::debug;

use crate::calibration::color::Rgb;
use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::image::Image;
use crate::calibration::raw::decoder::RawDecoder;
use crate::calibration::raw::types::{ContainerFormat, PIXELS_PER_CHUNK, SensorLayout};

/// Fixed header size preceding the raw payload in `JpegTrailer` containers.
const JPEG_HEADER_BYTES: usize = 32768;
/// Magic at the start of that header.
const HEADER_MAGIC: [u8; 4] = *b"BRCM";

pub struct PackedRawDecoder {
    layout: SensorLayout,
    container: ContainerFormat,
}

impl PackedRawDecoder {
    pub fn new(layout: SensorLayout, container: ContainerFormat) -> Self {
        Self { layout, container }
    }

    /// Decode a bare raw payload. The buffer must be exactly the size the
    /// layout computes; anything else is rejected as corrupt.
    pub fn decode_raw(&self, raw: &[u8]) -> Result<Image> {
        let expected = self.layout.raw_bytes();
        if raw.len() != expected {
            return Err(CalibrationError::RawSizeMismatch {
                expected,
                actual: raw.len(),
            });
        }

        let width = self.layout.width();
        let height = self.layout.height();
        debug!("Decoding {}x{} raw buffer, {} bytes", width, height, expected);

        let mut image = Image::new(width / 2, height / 2)?;

        for y in (0..height).step_by(2) {
            let out_y = y / 2;
            for x_chunk in 0..width / PIXELS_PER_CHUNK {
                let out_x = x_chunk * PIXELS_PER_CHUNK / 2;
                let top = self.unpack_chunk(raw, x_chunk, y);
                let bottom = self.unpack_chunk(raw, x_chunk, y + 1);
                image.set_pixel(out_x, out_y, combine_quad(top[0], top[1], bottom[0], bottom[1]));
                image.set_pixel(
                    out_x + 1,
                    out_y,
                    combine_quad(top[2], top[3], bottom[2], bottom[3]),
                );
            }
        }

        Ok(image)
    }

    /// Decode a JPEG container with the raw payload appended: the trailer is
    /// a `BRCM` header immediately followed by the raw buffer.
    pub fn decode_jpeg_trailer(&self, data: &[u8]) -> Result<Image> {
        let trailer_len = self.layout.raw_bytes() + JPEG_HEADER_BYTES;
        if data.len() < trailer_len {
            return Err(CalibrationError::RawSizeMismatch {
                expected: trailer_len,
                actual: data.len(),
            });
        }

        let header_start = data.len() - trailer_len;
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&data[header_start..header_start + 4]);
        if magic != HEADER_MAGIC {
            return Err(CalibrationError::BadContainerMagic {
                expected: HEADER_MAGIC,
                actual: magic,
            });
        }

        self.decode_raw(&data[data.len() - self.layout.raw_bytes()..])
    }

    fn unpack_chunk(&self, raw: &[u8], x_chunk: usize, y: usize) -> [i32; PIXELS_PER_CHUNK] {
        let start = y * self.layout.row_bytes() + x_chunk * self.layout.chunk_bytes();
        let packed_low = u32::from(raw[start + 4]);

        let mut samples = [0i32; PIXELS_PER_CHUNK];
        for (i, sample) in samples.iter_mut().enumerate() {
            let high = u32::from(raw[start + i]);
            let low = (packed_low >> (6 - 2 * i)) & 0b11;
            *sample = (((high << 2) | low) << 6) as i32;
        }
        samples
    }
}

/// Bayer quad to RGB. Channel assignment is bit-layout specific.
fn combine_quad(y0x0: i32, y0x1: i32, y1x0: i32, y1x1: i32) -> Rgb {
    Rgb::rgb(y1x1, (y0x1 + y1x0) / 2, y0x0)
}

impl RawDecoder for PackedRawDecoder {
    fn decode(&self, data: &[u8]) -> Result<Image> {
        match self.container {
            ContainerFormat::Bare => self.decode_raw(data),
            ContainerFormat::JpegTrailer => self.decode_jpeg_trailer(data),
        }
    }
}
