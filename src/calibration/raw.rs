//! Raw sensor decoding module
//!
//! Unpacks the packed 10-bit Bayer buffer produced by the Pi camera into an
//! RGB pixel grid, demosaicing each 2x2 sensor quad into one output pixel.

mod decoder;
mod packed_decoder;
pub mod types;

pub use decoder::RawDecoder;
pub use packed_decoder::PackedRawDecoder;
pub use types::{ContainerFormat, SensorLayout};
