//! Camera color calibration pipeline
//!
//! This module turns a packed 10-bit raw sensor capture into a calibrated
//! image by fitting a color lookup table against the 24-patch ColorChecker
//! reference chart, with separate modules for raw decoding, LUT mapping,
//! chart scoring, fitting, and pipeline orchestration.

pub mod chart;
pub mod color;
pub mod common;
pub mod fit;
pub mod image;
pub mod lut;
pub mod pipeline;
pub mod raw;

pub use common::{CalibrationError, Result};

pub use color::{Color, Coord, MAX_COLOR, MIN_COLOR, Pos, Rgb};

pub use image::{Image, ImageWriter, PngWriter};

pub use raw::{ContainerFormat, PackedRawDecoder, RawDecoder, SensorLayout};

pub use lut::{ColorMap, Lattice, Lut1d, Lut3d};

pub use chart::{COLORCHECKER_SRGB, PatchMatch};

pub use fit::{FitConfig, FitReport, LutFitter, find_possible_minimum};

pub use pipeline::{
    CalibrationConfig, CalibrationConfigBuilder, CalibrationOutput, CalibrationPipeline,
};
