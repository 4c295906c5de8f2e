//! Joint 3D calibration volume with trilinear interpolation.

use crate::calibration::color::{MAX_COLOR, Rgb};
use crate::calibration::common::error::{CalibrationError, Result};
use crate::calibration::lut::map::{ColorMap, Lattice, block_size, find_channel_root};

/// A lattice of `nx * ny * nz` colors spaced evenly over the channel range
/// on each axis. Lattice dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut3d {
    nx: usize,
    ny: usize,
    nz: usize,
    points: Vec<Rgb>,
}

impl Lut3d {
    /// Identity-mapped lattice: every point holds its own axis positions.
    pub fn identity(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        for n in [nx, ny, nz] {
            if n < 2 {
                return Err(CalibrationError::InvalidLatticeSize(n));
            }
        }

        let mut points = Vec::with_capacity(nx * ny * nz);
        for x in 0..nx {
            let r = (block_size(nx) * x as i32).min(MAX_COLOR);
            for y in 0..ny {
                let g = (block_size(ny) * y as i32).min(MAX_COLOR);
                for z in 0..nz {
                    let b = (block_size(nz) * z as i32).min(MAX_COLOR);
                    points.push(Rgb::rgb(r, g, b));
                }
            }
        }

        Ok(Self { nx, ny, nz, points })
    }

    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.ny + y) * self.nz + z
    }

    pub fn at(&self, x: usize, y: usize, z: usize) -> &Rgb {
        &self.points[self.index(x, y, z)]
    }

    pub fn at_mut(&mut self, x: usize, y: usize, z: usize) -> &mut Rgb {
        let index = self.index(x, y, z);
        &mut self.points[index]
    }
}

impl ColorMap for Lut3d {
    /// Trilinear interpolation across the 8 lattice corners enclosing the
    /// input, collapsing axis X first, then Y, then Z.
    fn map_color(&self, color: &Rgb) -> Rgb {
        let (rx, rem_x) = find_channel_root(color.r(), self.nx);
        let (ry, rem_y) = find_channel_root(color.g(), self.ny);
        let (rz, rem_z) = find_channel_root(color.b(), self.nz);

        let corner = |dx: usize, dy: usize, dz: usize| self.at(rx + dx, ry + dy, rz + dz);
        let bx = block_size(self.nx);

        let inter00 = corner(0, 0, 0).interpolate(corner(1, 0, 0), rem_x, bx);
        let inter01 = corner(0, 0, 1).interpolate(corner(1, 0, 1), rem_x, bx);
        let inter10 = corner(0, 1, 0).interpolate(corner(1, 1, 0), rem_x, bx);
        let inter11 = corner(0, 1, 1).interpolate(corner(1, 1, 1), rem_x, bx);

        let by = block_size(self.ny);
        let inter0 = inter00.interpolate(&inter10, rem_y, by);
        let inter1 = inter01.interpolate(&inter11, rem_y, by);

        inter0
            .interpolate(&inter1, rem_z, block_size(self.nz))
            .crop()
    }
}

impl Lattice for Lut3d {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::image::Image;

    #[test]
    fn identity_requires_two_points_per_axis() {
        assert!(matches!(
            Lut3d::identity(1, 3, 3),
            Err(CalibrationError::InvalidLatticeSize(1))
        ));
        assert!(matches!(
            Lut3d::identity(4, 3, 0),
            Err(CalibrationError::InvalidLatticeSize(0))
        ));
        assert!(Lut3d::identity(2, 2, 2).is_ok());
    }

    #[test]
    fn identity_lattice_holds_axis_positions() {
        let lut = Lut3d::identity(4, 3, 3).unwrap();
        assert_eq!(*lut.at(0, 0, 0), Rgb::rgb(0, 0, 0));
        assert_eq!(*lut.at(1, 0, 0), Rgb::rgb(21845, 0, 0));
        assert_eq!(*lut.at(3, 2, 2), Rgb::rgb(MAX_COLOR, MAX_COLOR, MAX_COLOR));
        assert_eq!(*lut.at(0, 1, 2), Rgb::rgb(0, 32768, MAX_COLOR));
    }

    #[test]
    fn identity_preserves_exact_lattice_points() {
        let lut = Lut3d::identity(5, 5, 5).unwrap();
        // every unclamped lattice position maps to itself
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let c = Rgb::rgb(16384 * x, 16384 * y, 16384 * z);
                    assert_eq!(lut.map_color(&c), c);
                }
            }
        }
    }

    #[test]
    fn identity_maps_extremes_within_rounding() {
        let lut = Lut3d::identity(4, 3, 3).unwrap();
        assert_eq!(lut.map_color(&Rgb::rgb(0, 0, 0)), Rgb::rgb(0, 0, 0));
        let top = lut.map_color(&Rgb::rgb(MAX_COLOR, MAX_COLOR, MAX_COLOR));
        for channel in top.0 {
            assert!(MAX_COLOR - channel <= 1, "got {channel:#x}");
        }
    }

    #[test]
    fn identity_is_monotonic_per_channel() {
        let lut = Lut3d::identity(3, 3, 3).unwrap();
        for c in 0..3 {
            let mut prev = -1;
            for value in (0..=MAX_COLOR).step_by(1021) {
                let mut input = Rgb::rgb(0x3000, 0x9000, 0xd000);
                input.0[c] = value;
                let out = lut.map_color(&input).0[c];
                assert!(out >= prev, "channel {c} decreased at {value:#x}");
                prev = out;
            }
        }
    }

    #[test]
    fn map_interpolates_between_corners() {
        let mut lut = Lut3d::identity(2, 2, 2).unwrap();
        // bend the all-max corner's red channel down to zero
        lut.at_mut(1, 1, 1).0[0] = 0;
        let mid = 0x8000;
        let out = lut.map_color(&Rgb::rgb(mid, mid, mid));
        // red gets half the bent corner's pull at the cube center
        let expected_g = lut
            .map_color(&Rgb::rgb(0, mid, 0))
            .g();
        assert!(out.r() < expected_g);
    }

    #[test]
    fn map_image_maps_every_pixel() {
        let lut = Lut3d::identity(2, 2, 2).unwrap();
        let mut image = Image::new(3, 2).unwrap();
        image.set_pixel(2, 1, Rgb::rgb(16384, 32768, 49152));
        let mapped = lut.map_image(&image);
        assert_eq!(mapped.width(), 3);
        assert_eq!(mapped.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(mapped.pixel(x, y), &lut.map_color(image.pixel(x, y)));
            }
        }
    }

    #[test]
    fn lattice_indexing_is_row_major_over_xyz() {
        let mut lut = Lut3d::identity(2, 2, 2).unwrap();
        assert_eq!(lut.channel_count(), 24);
        // point (1, 0, 1) is flat index 5; its blue channel is index 17
        assert_eq!(lut.channel(17), lut.at(1, 0, 1).b());
        lut.set_channel(17, 4242);
        assert_eq!(lut.at(1, 0, 1).b(), 4242);
    }
}
