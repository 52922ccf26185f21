// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the engine's working
//!
//! Neither of these is needed to find a seam; they're how you check
//! that the seams make sense.  The energy map is drawn in grey, scaled
//! so that the most energetic pixel is white, and a seam is drawn as a
//! red line over a copy of the picture.

use crate::error::Result;
use crate::lattice::Direction;
use crate::picture::Picture;
use crate::seam::check_seam;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma, Rgb, RgbImage};
use itertools::iproduct;

const SEAM_COLOUR: Rgb<u8> = Rgb([255, 0, 0]);

/// Render the real pixels of an energy grid (everything but the
/// sentinel row and column) as a greyscale image.  A grid with no real
/// pixels renders as an empty image.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = (
        energy.width.saturating_sub(1),
        energy.height.saturating_sub(1),
    );
    let factor = iproduct!(0..height, 0..width)
        .map(|(y, x)| energy[(x, y)])
        .fold(0.0, f64::max);
    GrayImage::from_fn(width, height, |x, y| {
        let level = cq!(factor > 0.0, energy[(x, y)] * 255.0 / factor, 0.0);
        Luma([level.round().clamp(0.0, 255.0) as u8])
    })
}

/// A copy of the picture with `seam` painted over it.
pub fn seam_overlay(picture: &Picture, seam: &[u32], direction: Direction) -> Result<RgbImage> {
    let (width, height) = picture.dimensions();
    check_seam(seam, direction, width, height)?;
    let mut out = picture.as_image().clone();
    for (i, s) in seam.iter().enumerate() {
        let (x, y) = match direction {
            Direction::Horizontal => (i as u32, *s),
            Direction::Vertical => (*s, i as u32),
        };
        out.put_pixel(x, y, SEAM_COLOUR);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::compute_energy;

    #[test]
    fn brightest_energy_is_white() {
        let mut data = vec![0u8; 4 * 3 * 3];
        // Red channel of (1,1).
        data[15] = 200;
        let energy = compute_energy(&Picture::from_raw(4, 3, data).unwrap());
        let image = energy_to_image(&energy);
        assert_eq!(image.dimensions(), (4, 3));
        // Frame pixels carry the largest energy in a picture this small.
        assert_eq!(image.get_pixel(0, 0), &Luma([255]));
        assert!(image.get_pixel(2, 1).0[0] < 255);
    }

    #[test]
    fn flat_energy_renders_black() {
        let energy = TwoDimensionalMap::filled(3, 3, 0.0);
        let image = energy_to_image(&energy);
        assert!(image.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn grids_without_real_pixels_render_empty() {
        let image = energy_to_image(&TwoDimensionalMap::filled(0, 0, 0.0));
        assert_eq!(image.dimensions(), (0, 0));
        let image = energy_to_image(&TwoDimensionalMap::filled(1, 4, 0.0));
        assert_eq!(image.dimensions(), (0, 3));
    }

    #[test]
    fn overlay_paints_only_the_seam() {
        let picture = Picture::from_raw(3, 2, vec![9; 18]).unwrap();
        let out = seam_overlay(&picture, &[2, 1], Direction::Vertical).unwrap();
        assert_eq!(out.get_pixel(2, 0), &SEAM_COLOUR);
        assert_eq!(out.get_pixel(1, 1), &SEAM_COLOUR);
        assert_eq!(out.get_pixel(0, 0), &Rgb([9, 9, 9]));
        assert_eq!(picture.rgb(2, 0), [9, 9, 9]);
    }

    #[test]
    fn overlay_refuses_broken_seams() {
        let picture = Picture::from_raw(3, 2, vec![9; 18]).unwrap();
        assert!(seam_overlay(&picture, &[0, 2], Direction::Vertical).is_err());
    }
}
