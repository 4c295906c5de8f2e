//! LUT fitting module
//!
//! A bounded divide-and-sample minimum search drives per-channel coordinate
//! descent over a LUT lattice, minimizing the chart score of the mapped
//! reference image.

mod fitter;
mod minimum;

pub use fitter::{FitConfig, FitReport, LutFitter};
pub use minimum::find_possible_minimum;
