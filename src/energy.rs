// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a picture
//!
//! The energy of a pixel is the dual-gradient measure: the squared
//! colour distance between its left and right neighbours plus the
//! squared colour distance between the neighbours above and below it.
//!
//! ```text
//!        |Δx|² = (Δrx)² + (Δgx)² + (Δbx)²
//!        |Δy|² = (Δry)² + (Δgy)² + (Δby)²
//!       e(x,y) = |Δx|² + |Δy|²
//! ```
//!
//! Pixels on the edge of the picture don't have both neighbours, so
//! they get the largest energy any pixel could have, which keeps seams
//! off the frame wherever there is an alternative.  The row and column
//! just past the picture are where the sentinel nodes live; they cost
//! nothing to enter.

use crate::picture::Picture;
use crate::twodmap::TwoDimensionalMap;

/// 255² × 3, the most one pair of neighbours can contribute.  Every
/// pixel on the picture's frame gets this.
pub const BORDER_ENERGY: f64 = 195_075.0;

// Takes the channels (R,G,B) from two pixels, squares the difference
// between each channel, and sums them up.
fn energy_of_pair(p1: &[u8; 3], p2: &[u8; 3]) -> f64 {
    p1.iter()
        .zip(p2.iter())
        .map(|(c1, c2)| {
            let delta = i32::from(*c1) - i32::from(*c2);
            f64::from(delta * delta)
        })
        .sum()
}

/// The energy of one coordinate of the `(width + 1) × (height + 1)`
/// grid.  The caller guarantees `x <= width` and `y <= height`.
pub fn pixel_energy(picture: &Picture, x: u32, y: u32) -> f64 {
    let (width, height) = picture.dimensions();
    if x == width || y == height {
        return 0.0;
    }
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }
    let rgb = |x, y| picture.rgb(x, y);
    energy_of_pair(&rgb(x + 1, y), &rgb(x - 1, y)) + energy_of_pair(&rgb(x, y + 1), &rgb(x, y - 1))
}

/// Compute the energy of every coordinate, the sentinel row and column
/// included.
pub fn compute_energy(picture: &Picture) -> TwoDimensionalMap<f64> {
    let (width, height) = picture.dimensions();
    TwoDimensionalMap::from_fn(width + 1, height + 1, |x, y| pixel_energy(picture, x, y))
}
