//! Per-channel independent 1D calibration curve.

use crate::calibration::color::{Color, MAX_COLOR, Rgb};
use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::lut::map::{ColorMap, Lattice, block_size, find_channel_root, lerp};

/// An ordered sequence of lattice colors along a single axis. Each output
/// channel is looked up independently using the matching input channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut1d {
    points: Vec<Rgb>,
}

impl Lut1d {
    /// Even grey-ramp lattice covering the full channel range.
    pub fn identity(points: usize) -> Result<Self> {
        if points < 2 {
            return Err(CalibrationError::InvalidLatticeSize(points));
        }
        let block = block_size(points);
        let points = (0..points)
            .map(|i| {
                let value = (block * i as i32).min(MAX_COLOR);
                Rgb::rgb(value, value, value)
            })
            .collect();
        Ok(Self { points })
    }

    pub fn from_points(points: Vec<Rgb>) -> Result<Self> {
        if points.len() < 2 {
            return Err(CalibrationError::InvalidLatticeSize(points.len()));
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ColorMap for Lut1d {
    fn map_color(&self, color: &Rgb) -> Rgb {
        let block = block_size(self.points.len());
        let mut out = [0i32; 3];
        for (c, out_channel) in out.iter_mut().enumerate() {
            let (index, rem) = find_channel_root(color.0[c], self.points.len());
            *out_channel = lerp(
                self.points[index].0[c],
                self.points[index + 1].0[c],
                rem,
                block,
            );
        }
        Color(out).crop()
    }
}

impl Lattice for Lut1d {
    fn channel_count(&self) -> usize {
        self.points.len() * 3
    }

    fn channel(&self, index: usize) -> i32 {
        self.points[index / 3].0[index % 3]
    }

    fn set_channel(&mut self, index: usize, value: i32) {
        self.points[index / 3].0[index % 3] = value;
    }
}
