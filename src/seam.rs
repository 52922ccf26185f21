// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Checking and pricing seams
//!
//! Whatever consumes a seam (a remover, a visualizer, a test) needs to
//! know it is well formed before indexing a picture with it: one entry
//! per column or row, every entry inside the picture, and consecutive
//! entries no more than one pixel apart.

use crate::error::{Result, SeamError};
use crate::lattice::Direction;
use crate::seamcarver::SeamCarver;

/// Confirm that `seam` is a connected `direction` seam through a
/// `width × height` picture.
pub fn check_seam(seam: &[u32], direction: Direction, width: u32, height: u32) -> Result<()> {
    let (length, span) = match direction {
        Direction::Horizontal => (width, height),
        Direction::Vertical => (height, width),
    };
    if seam.len() != length as usize {
        return Err(SeamError::invalid(format!(
            "a {} seam through a {}x{} picture has {} entries, got {}",
            direction,
            width,
            height,
            length,
            seam.len()
        )));
    }
    if let Some((at, entry)) = seam.iter().enumerate().find(|(_, e)| **e >= span) {
        return Err(SeamError::invalid(format!(
            "seam entry {} is {}, past the picture edge at {}",
            at, entry, span
        )));
    }
    if let Some(at) = seam
        .windows(2)
        .position(|pair| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
    {
        return Err(SeamError::invalid(format!(
            "seam jumps from {} to {} between entries {} and {}",
            seam[at],
            seam[at + 1],
            at,
            at + 1
        )));
    }
    Ok(())
}

/// The total energy of the pixels under `seam`, which must first pass
/// `check_seam` for the carver's picture.
pub fn seam_energy(carver: &SeamCarver, seam: &[u32], direction: Direction) -> Result<f64> {
    check_seam(seam, direction, carver.width(), carver.height())?;
    seam.iter()
        .enumerate()
        .map(|(i, s)| match direction {
            Direction::Horizontal => carver.energy(i as u32, *s),
            Direction::Vertical => carver.energy(*s, i as u32),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::BORDER_ENERGY;
    use crate::seamfinder::SeamFinder;
    use image::{Rgb, RgbImage};

    #[test]
    fn well_formed_seams_pass() {
        assert!(check_seam(&[0, 1, 2, 2, 1], Direction::Vertical, 3, 5).is_ok());
        assert!(check_seam(&[4, 3], Direction::Horizontal, 2, 5).is_ok());
    }

    #[test]
    fn wrong_lengths_fail() {
        assert!(check_seam(&[0, 1], Direction::Vertical, 3, 5).is_err());
        assert!(check_seam(&[0, 1, 1], Direction::Horizontal, 2, 5).is_err());
    }

    #[test]
    fn entries_must_stay_inside() {
        assert!(check_seam(&[0, 3], Direction::Vertical, 3, 2).is_err());
        assert!(check_seam(&[2, 2], Direction::Horizontal, 2, 2).is_err());
    }

    #[test]
    fn entries_must_touch() {
        let err = check_seam(&[0, 2, 2], Direction::Vertical, 3, 3).unwrap_err();
        assert!(matches!(err, SeamError::InvalidArgument(_)));
    }

    #[test]
    fn found_seams_cost_what_the_carver_says() {
        let image = RgbImage::from_fn(6, 4, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 7]));
        let carver = SeamCarver::new(&image).unwrap();
        let path = carver.find_seam(Direction::Horizontal);
        assert_eq!(
            seam_energy(&carver, &path.seam, Direction::Horizontal),
            Ok(path.cost)
        );
        let seam = carver.find_vertical_seam();
        assert_eq!(
            seam_energy(&carver, &seam, Direction::Vertical),
            Ok(carver.find_seam(Direction::Vertical).cost)
        );
    }

    #[test]
    fn frame_seams_cost_the_border_constant() {
        let carver = SeamCarver::new(&RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]))).unwrap();
        assert_eq!(
            seam_energy(&carver, &[0, 0, 0], Direction::Vertical),
            Ok(3.0 * BORDER_ENERGY)
        );
        assert!(seam_energy(&carver, &[0, 0], Direction::Vertical).is_err());
    }
}
