//! ColorChecker reference chart scoring.
//!
//! The 24 patch values below are the chart's sRGB references widened to the
//! 16-bit channel range. Scoring scans an image for the closest pixel to
//! each patch; the summed distances are the fitness value the LUT fitter
//! minimizes. Lower is better, zero means every patch is present exactly.

use crate::calibration::color::{Pos, Rgb};
use crate::calibration::image::Image;
use crate::calibration::lut::ColorMap;

pub const COLORCHECKER_SRGB: [Rgb; 24] = [
    Rgb::rgb(0x7300, 0x5200, 0x4400),
    Rgb::rgb(0xc200, 0x9600, 0x8200),
    Rgb::rgb(0x6200, 0x7a00, 0x9d00),
    Rgb::rgb(0x5700, 0x6c00, 0x4300),
    Rgb::rgb(0x8500, 0x8000, 0xb100),
    Rgb::rgb(0x6700, 0xbd00, 0xaa00),
    Rgb::rgb(0xd600, 0x7e00, 0x2c00),
    Rgb::rgb(0x5000, 0x5b00, 0xa600),
    Rgb::rgb(0xc100, 0x5a00, 0x6300),
    Rgb::rgb(0x5e00, 0x3c00, 0x6c00),
    Rgb::rgb(0x9d00, 0xbc00, 0x4000),
    Rgb::rgb(0xe000, 0xa300, 0x2e00),
    Rgb::rgb(0x3800, 0x3d00, 0x9600),
    Rgb::rgb(0x4600, 0x9400, 0x4900),
    Rgb::rgb(0xaf00, 0x3600, 0x3c00),
    Rgb::rgb(0xe700, 0xc700, 0x1f00),
    Rgb::rgb(0xbb00, 0x5600, 0x9500),
    Rgb::rgb(0x0800, 0x8500, 0xa100),
    Rgb::rgb(0xf300, 0xf300, 0xf200),
    Rgb::rgb(0xc800, 0xc800, 0xc800),
    Rgb::rgb(0xa000, 0xa000, 0xa000),
    Rgb::rgb(0x7a00, 0x7a00, 0x7900),
    Rgb::rgb(0x5500, 0x5500, 0x5500),
    Rgb::rgb(0x3400, 0x3400, 0x3400),
];

const MARKER_COLOR: Rgb = Rgb::rgb(0xffff, 0xffff, 0xffff);
const MARKER_SIZE: usize = 9;

/// Best match found for one chart patch: where it was seen and how far off
/// it was. Ties keep the first match in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchMatch {
    pub pos: Pos,
    pub distance: u32,
}

/// For each patch, the scan-order first pixel at minimum color distance.
pub fn closest_matches(image: &Image) -> [PatchMatch; 24] {
    let mut matches = [PatchMatch {
        pos: Pos::xy(0, 0),
        distance: u32::MAX,
    }; 24];

    for (y, row) in image.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            for (cc, reference) in COLORCHECKER_SRGB.iter().enumerate() {
                let distance = pixel.abs_diff(reference);
                if distance < matches[cc].distance {
                    matches[cc] = PatchMatch {
                        pos: Pos::xy(x as i32, y as i32),
                        distance,
                    };
                }
            }
        }
    }

    matches
}

/// Summed minimum distance of every patch to its closest pixel.
pub fn score_image(image: &Image) -> u64 {
    let mut minima = [u32::MAX; 24];
    for row in image.rows() {
        for pixel in row {
            for (cc, reference) in COLORCHECKER_SRGB.iter().enumerate() {
                minima[cc] = minima[cc].min(pixel.abs_diff(reference));
            }
        }
    }
    minima.iter().map(|&d| u64::from(d)).sum()
}

/// Score the mapped image without materializing it: every source pixel is
/// streamed through the map and folded into the same 24 running minima.
pub fn score_map<M: ColorMap>(map: &M, reference: &Image) -> u64 {
    let mut minima = [u32::MAX; 24];
    for row in reference.rows() {
        for pixel in row {
            let mapped = map.map_color(pixel);
            for (cc, chart_color) in COLORCHECKER_SRGB.iter().enumerate() {
                minima[cc] = minima[cc].min(mapped.abs_diff(chart_color));
            }
        }
    }
    minima.iter().map(|&d| u64::from(d)).sum()
}

/// Draw a marker square around each patch match, for visual inspection of
/// where the chart was found.
pub fn highlight_matches(image: &mut Image, matches: &[PatchMatch; 24]) {
    for patch in matches {
        let half = (MARKER_SIZE / 2) as i32;
        let start = Pos::xy(
            (patch.pos.x() - half).max(0),
            (patch.pos.y() - half).max(0),
        );
        image.draw_square(start, MARKER_COLOR, MARKER_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::lut::Lut3d;

    const BLACK: Rgb = Rgb::rgb(0, 0, 0);

    fn distance_to_black(color: &Rgb) -> u32 {
        color.abs_diff(&BLACK)
    }

    #[test]
    fn score_is_zero_when_every_patch_is_present() {
        let mut image = Image::new(24, 1).unwrap();
        for (i, color) in COLORCHECKER_SRGB.iter().enumerate() {
            image.set_pixel(i, 0, *color);
        }
        assert_eq!(score_image(&image), 0);

        let matches = closest_matches(&image);
        for (i, patch) in matches.iter().enumerate() {
            assert_eq!(patch.distance, 0);
            assert_eq!(patch.pos, Pos::xy(i as i32, 0));
        }
    }

    #[test]
    fn uniform_image_scores_the_summed_patch_distances() {
        let image = Image::new(4, 4).unwrap(); // all black
        let expected: u64 = COLORCHECKER_SRGB
            .iter()
            .map(|c| u64::from(distance_to_black(c)))
            .sum();
        assert_eq!(score_image(&image), expected);
        assert!(score_image(&image) > 0);
    }

    #[test]
    fn solid_square_matches_its_patch_exactly() {
        // a 10x10 square of patch 0 on a black background
        let mut image = Image::new(20, 20).unwrap();
        for y in 5..15 {
            for x in 5..15 {
                image.set_pixel(x, y, COLORCHECKER_SRGB[0]);
            }
        }

        let matches = closest_matches(&image);
        assert_eq!(matches[0].distance, 0);
        let (x, y) = (matches[0].pos.x(), matches[0].pos.y());
        assert!((5..15).contains(&x) && (5..15).contains(&y));

        for (cc, patch) in matches.iter().enumerate().skip(1) {
            let reference = &COLORCHECKER_SRGB[cc];
            let expected = distance_to_black(reference).min(reference.abs_diff(&COLORCHECKER_SRGB[0]));
            assert!(patch.distance > 0);
            assert_eq!(patch.distance, expected);
        }
    }

    #[test]
    fn ties_keep_the_first_scan_order_pixel() {
        // two identical pixels; the earlier one must win
        let mut image = Image::new(3, 1).unwrap();
        image.set_pixel(1, 0, COLORCHECKER_SRGB[5]);
        image.set_pixel(2, 0, COLORCHECKER_SRGB[5]);
        let matches = closest_matches(&image);
        assert_eq!(matches[5].pos, Pos::xy(1, 0));
    }

    #[test]
    fn score_map_equals_score_of_mapped_image() {
        let mut lut = Lut3d::identity(2, 2, 2).unwrap();
        lut.at_mut(1, 1, 1).0[1] = 0x1234;

        let mut image = Image::new(4, 2).unwrap();
        for (i, pixel) in [
            Rgb::rgb(0x1000, 0x9000, 0x4000),
            Rgb::rgb(0x7300, 0x5200, 0x4400),
            Rgb::rgb(0xffff, 0xffff, 0xffff),
            Rgb::rgb(0x0100, 0x0200, 0x0300),
        ]
        .iter()
        .enumerate()
        {
            image.set_pixel(i, 0, *pixel);
        }

        assert_eq!(score_map(&lut, &image), score_image(&lut.map_image(&image)));
    }

    #[test]
    fn highlight_draws_markers_at_matches() {
        let mut image = Image::new(20, 20).unwrap();
        image.set_pixel(10, 10, COLORCHECKER_SRGB[0]);
        let matches = closest_matches(&image);
        highlight_matches(&mut image, &matches);
        // marker outline around (10, 10) starts at (6, 6)
        assert_eq!(*image.pixel(6, 6), Rgb::rgb(0xffff, 0xffff, 0xffff));
        // black background match at (0, 0) draws a clamped marker
        assert_eq!(*image.pixel(0, 0), Rgb::rgb(0xffff, 0xffff, 0xffff));
    }
}
