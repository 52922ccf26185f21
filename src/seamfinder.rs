// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// How seams are requested from an image.  It's a primitive interface,
/// just enough to put a seam remover, or a visualizer, on top of any
/// engine that can answer these two questions.
pub trait SeamFinder {
    /// One row index per column: entry `x` is the row of the seam
    /// pixel in column `x`.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// One column index per row: entry `y` is the column of the seam
    /// pixel in row `y`.
    fn find_vertical_seam(&self) -> Vec<u32>;
}
