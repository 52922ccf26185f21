// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dense two-dimensional storage
//!
//! Every per-pixel table the seam engine keeps (the energy cache, the
//! visited marks of the depth-first search, the distance grid and the
//! predecessor grid) is one of these.  They are all sized to the
//! picture *plus* the sentinel row and column, so the caller decides
//! the extent and this type only does the addressing.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `P`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map with every cell set to `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// A map with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    /// Build a map by evaluating `f(x, y)` for every cell, in row-major
    /// order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        TwoDimensionalMap {
            width,
            height,
            cells,
        }
    }

    // Keep the index math in a single location and never, ever mess
    // with it anywhere else.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Checked lookup.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if self.contains(x, y) {
            Some(self.cells[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// The raw cells, row-major.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
