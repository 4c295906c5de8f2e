//! Pixel grid module
//!
//! Row-major RGB pixel storage with drawing primitives for debug overlays,
//! plus PNG export of the finished grid.

mod grid;
mod png_writer;
mod writer;

pub use grid::Image;
pub use png_writer::PngWriter;
pub use writer::ImageWriter;
