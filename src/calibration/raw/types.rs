//! Sensor layout description and derived buffer geometry.

use crate::calibration::common::error::{CalibrationError, Result};

/// Samples packed per 5-byte chunk in the 10-bit layout.
pub(crate) const PIXELS_PER_CHUNK: usize = 4;
const BITS_PER_BYTE: usize = 8;

/// How the raw payload is wrapped on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// The bare raw buffer, nothing else.
    Bare,
    /// A JPEG with the raw buffer appended, preceded by a fixed-size header
    /// that starts with the `BRCM` magic (raspistill `--raw` output).
    JpegTrailer,
}

/// Geometry of one packed 10-bit sensor readout.
///
/// All values are fixed for the lifetime of the layout; [`SensorLayout::new`]
/// validates them up front so the decode loops can assume they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorLayout {
    width: usize,
    height: usize,
    bit_depth: usize,
    align: usize,
    pad: usize,
}

impl SensorLayout {
    /// Pi Camera v2 (IMX219): 3280x2464, 10-bit, rows padded by 2 and
    /// aligned to 16.
    pub const PI_CAMERA_V2: SensorLayout = SensorLayout {
        width: 3280,
        height: 2464,
        bit_depth: 10,
        align: 16,
        pad: 2,
    };

    pub fn new(
        width: usize,
        height: usize,
        bit_depth: usize,
        align: usize,
        pad: usize,
    ) -> Result<Self> {
        // The chunk decode is specific to the 10-bit packing.
        if bit_depth != 10 {
            return Err(CalibrationError::UnsupportedLayout(format!(
                "only 10-bit packing is supported, got {bit_depth}-bit"
            )));
        }
        if align == 0 || !align.is_power_of_two() {
            return Err(CalibrationError::UnsupportedLayout(format!(
                "alignment must be a power of two, got {align}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(CalibrationError::InvalidDimensions(width, height));
        }
        // Demosaic consumes full 2x2 quads, one chunk pair at a time.
        if width % PIXELS_PER_CHUNK != 0 || height % 2 != 0 {
            return Err(CalibrationError::UnsupportedLayout(format!(
                "width must be a multiple of {PIXELS_PER_CHUNK} and height even, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            bit_depth,
            align,
            pad,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn aligned(&self, val: usize) -> usize {
        (val + self.align - 1) & !(self.align - 1)
    }

    /// Bytes per padded, aligned sensor row.
    pub fn row_bytes(&self) -> usize {
        self.aligned(self.aligned(self.width + self.pad) * self.bit_depth / BITS_PER_BYTE)
    }

    /// Total rows in the buffer, including padding rows.
    pub fn num_rows(&self) -> usize {
        self.aligned(self.height + self.pad)
    }

    /// Exact raw payload size in bytes.
    pub fn raw_bytes(&self) -> usize {
        self.row_bytes() * self.num_rows()
    }

    /// Bytes per group of [`PIXELS_PER_CHUNK`] packed samples.
    pub fn chunk_bytes(&self) -> usize {
        self.bit_depth * PIXELS_PER_CHUNK / BITS_PER_BYTE
    }
}
