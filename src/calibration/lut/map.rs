use crate::calibration::color::{MAX_COLOR, Rgb};
use crate::calibration::image::Image;

/// An interpolated input-to-output color mapping.
pub trait ColorMap {
    fn map_color(&self, color: &Rgb) -> Rgb;

    /// Apply [`ColorMap::map_color`] to every pixel, producing a new image.
    fn map_image(&self, image: &Image) -> Image {
        let mut out = image.clone();
        for y in 0..image.height() {
            for x in 0..image.width() {
                out.set_pixel(x, y, self.map_color(image.pixel(x, y)));
            }
        }
        out
    }
}

/// Flat enumeration of every lattice channel of a LUT, in a stable order.
/// This is the mutation surface the fitter drives.
pub trait Lattice {
    fn channel_count(&self) -> usize;
    fn channel(&self, index: usize) -> i32;
    fn set_channel(&mut self, index: usize, value: i32);
}

/// Lattice spacing for an axis with `points` lattice points. The last
/// interior block is sized so the final point lands on the channel maximum.
pub(crate) fn block_size(points: usize) -> i32 {
    (MAX_COLOR + 1) / (points as i32 - 1)
}

/// Enclosing lattice interval for `value` on an axis with `points` points.
///
/// The root index is capped at `points - 2` so index + 1 is always a valid
/// lattice point; values at or past the last block extrapolate from the same
/// interval rather than being clamped before lookup.
pub(crate) fn find_channel_root(value: i32, points: usize) -> (usize, i32) {
    let block = block_size(points);
    let index = ((value / block).max(0) as usize).min(points - 2);
    (index, value - index as i32 * block)
}

/// Scalar linear interpolation: `lo + mul * (hi - lo) / div`.
pub(crate) fn lerp(lo: i32, hi: i32, mul: i32, div: i32) -> i32 {
    lo + (i64::from(mul) * (i64::from(hi) - i64::from(lo)) / i64::from(div)) as i32
}
