use crate::calibration::color::{Pos, Rgb};
use crate::calibration::common::error::{CalibrationError, Result};

/// A rectangular image of RGB pixels.
///
/// Width and height are fixed at construction; storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Create an all-black image. Rejects zero-sized dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CalibrationError::InvalidDimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> &Rgb {
        &self.pixels[y * self.width + x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn get(&self, pos: Pos) -> &Rgb {
        self.pixel(pos.x() as usize, pos.y() as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Horizontal line starting at `start`, clipped at the right edge.
    pub fn draw_x_line(&mut self, start: Pos, color: Rgb, length: usize) {
        let y = start.y() as usize;
        let x0 = start.x() as usize;
        for x in x0..self.width.min(x0 + length) {
            self.set_pixel(x, y, color);
        }
    }

    /// Vertical line starting at `start`, clipped at the bottom edge.
    pub fn draw_y_line(&mut self, start: Pos, color: Rgb, length: usize) {
        let x = start.x() as usize;
        let y0 = start.y() as usize;
        for y in y0..self.height.min(y0 + length) {
            self.set_pixel(x, y, color);
        }
    }

    /// Rectangle outline with its top-left corner at `start`.
    pub fn draw_rectangle(&mut self, start: Pos, color: Rgb, x_length: usize, y_length: usize) {
        self.draw_x_line(start, color, x_length);
        if start.y() as usize + y_length < self.height {
            self.draw_x_line(
                Pos::xy(start.x(), start.y() + y_length as i32),
                color,
                x_length,
            );
        }
        self.draw_y_line(start, color, y_length);
        if start.x() as usize + x_length < self.width {
            self.draw_y_line(
                Pos::xy(start.x() + x_length as i32, start.y()),
                color,
                y_length,
            );
        }
    }

    pub fn draw_square(&mut self, start: Pos, color: Rgb, length: usize) {
        self.draw_rectangle(start, color, length, length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::color::MAX_COLOR;

    const WHITE: Rgb = Rgb::rgb(MAX_COLOR, MAX_COLOR, MAX_COLOR);

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Image::new(0, 10),
            Err(CalibrationError::InvalidDimensions(0, 10))
        ));
        assert!(matches!(
            Image::new(10, 0),
            Err(CalibrationError::InvalidDimensions(10, 0))
        ));
    }

    #[test]
    fn pixels_start_black_and_round_trip() {
        let mut image = Image::new(4, 3).unwrap();
        assert_eq!(*image.pixel(3, 2), Rgb::default());
        image.set_pixel(3, 2, WHITE);
        assert_eq!(*image.pixel(3, 2), WHITE);
        assert_eq!(*image.get(Pos::xy(3, 2)), WHITE);
        assert_eq!(*image.pixel(2, 2), Rgb::default());
    }

    #[test]
    fn x_line_is_clipped_at_the_edge() {
        let mut image = Image::new(4, 2).unwrap();
        image.draw_x_line(Pos::xy(2, 1), WHITE, 10);
        assert_eq!(*image.pixel(1, 1), Rgb::default());
        assert_eq!(*image.pixel(2, 1), WHITE);
        assert_eq!(*image.pixel(3, 1), WHITE);
        assert_eq!(*image.pixel(3, 0), Rgb::default());
    }

    #[test]
    fn square_draws_only_the_outline() {
        let mut image = Image::new(6, 6).unwrap();
        image.draw_square(Pos::xy(1, 1), WHITE, 3);
        assert_eq!(*image.pixel(1, 1), WHITE);
        assert_eq!(*image.pixel(3, 1), WHITE);
        assert_eq!(*image.pixel(1, 4), WHITE);
        assert_eq!(*image.pixel(3, 4), WHITE);
        assert_eq!(*image.pixel(4, 3), WHITE);
        // interior and far corner untouched
        assert_eq!(*image.pixel(2, 2), Rgb::default());
        assert_eq!(*image.pixel(3, 3), Rgb::default());
        assert_eq!(*image.pixel(4, 4), Rgb::default());
    }

    #[test]
    fn rows_are_row_major() {
        let mut image = Image::new(2, 2).unwrap();
        image.set_pixel(1, 0, WHITE);
        let rows: Vec<&[Rgb]> = image.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], WHITE);
        assert_eq!(rows[1][1], Rgb::default());
    }
}
