//! Color lookup table module
//!
//! A LUT is a sparse lattice of known input to output color mappings; colors
//! between lattice points are reconstructed by linear (1D) or trilinear (3D)
//! interpolation. The fitter mutates lattices one channel at a time through
//! the [`Lattice`] trait.

mod lut1d;
mod lut3d;
mod map;

pub use lut1d::Lut1d;
pub use lut3d::Lut3d;
pub use map::{ColorMap, Lattice};
