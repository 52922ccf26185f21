// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shortest path through the seam lattice
//!
//! With the lattice in topological order, single-source shortest path
//! is one sweep: by the time a node is reached every edge into it has
//! already been relaxed, so its distance is final.  The cost of an edge
//! is the energy of the node it enters, which makes the distance of the
//! sink the energy of the cheapest seam.

use crate::lattice::{Direction, Lattice, Node};
use crate::twodmap::TwoDimensionalMap;

/// A seam and what it costs.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamPath {
    pub direction: Direction,
    /// Row per column for horizontal seams, column per row for
    /// vertical ones.
    pub seam: Vec<u32>,
    /// Sum of the energies of the seam's pixels.
    pub cost: f64,
}

struct Relaxation<'a> {
    lattice: &'a Lattice,
    energy: &'a TwoDimensionalMap<f64>,
    dist_to: TwoDimensionalMap<f64>,
    pixel_to: TwoDimensionalMap<Option<Node>>,
}

impl<'a> Relaxation<'a> {
    fn new(lattice: &'a Lattice, energy: &'a TwoDimensionalMap<f64>, source: Node) -> Self {
        let (w, h) = (lattice.width() + 1, lattice.height() + 1);
        let mut dist_to = TwoDimensionalMap::filled(w, h, f64::INFINITY);
        dist_to[lattice.slot(source)] = 0.0;
        Relaxation {
            lattice,
            energy,
            dist_to,
            pixel_to: TwoDimensionalMap::new(w, h),
        }
    }

    // Strictly less-than: when two routes tie, the one found first
    // stays.
    fn relax(&mut self, from: Node, to: Node) {
        let (f, t) = (self.lattice.slot(from), self.lattice.slot(to));
        let candidate = self.dist_to[f] + self.energy[t];
        if candidate < self.dist_to[t] {
            self.dist_to[t] = candidate;
            self.pixel_to[t] = Some(from);
        }
    }

    fn predecessor(&self, node: Node) -> Option<Node> {
        self.pixel_to[self.lattice.slot(node)]
    }
}

/// Relax the lattice's edges in `order` and trace the cheapest seam
/// back from the sink.  `energy` must cover the picture plus its
/// sentinel row and column, and `order` must be a topological order
/// of the lattice in `direction`.
pub fn shortest_seam(
    lattice: &Lattice,
    energy: &TwoDimensionalMap<f64>,
    order: &[Node],
    direction: Direction,
) -> SeamPath {
    let (source, sink) = (lattice.source(direction), lattice.sink(direction));
    let mut relaxation = Relaxation::new(lattice, energy, source);
    for &from in order {
        for to in lattice.successors(from, direction) {
            relaxation.relax(from, to);
        }
    }

    let length = match direction {
        Direction::Horizontal => lattice.width(),
        Direction::Vertical => lattice.height(),
    };
    let mut seam = vec![0u32; length as usize];
    let mut step = relaxation.predecessor(sink);
    while let Some(node) = step {
        if let Node::Pixel(x, y) = node {
            match direction {
                Direction::Horizontal => seam[x as usize] = y,
                Direction::Vertical => seam[y as usize] = x,
            }
        }
        step = relaxation.predecessor(node);
    }

    SeamPath {
        direction,
        seam,
        cost: relaxation.dist_to[lattice.slot(sink)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topological::topological_order;

    // Energies for the real pixels only; the sentinel row and column
    // are zero, as the energy field makes them.
    fn grid(width: u32, height: u32, real: &[f64]) -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_fn(width + 1, height + 1, |x, y| {
            cq!(
                x == width || y == height,
                0.0,
                real[(y * width + x) as usize]
            )
        })
    }

    fn solve(width: u32, height: u32, real: &[f64], direction: Direction) -> SeamPath {
        let lattice = Lattice::new(width, height).unwrap();
        let order = topological_order(&lattice, direction);
        shortest_seam(&lattice, &grid(width, height, real), &order, direction)
    }

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0, //
    ];

    #[test]
    fn energy_grid_to_vertical_seam() {
        let path = solve(5, 4, &ENERGY_DATA, Direction::Vertical);
        assert_eq!(path.seam, vec![2, 3, 4, 3]);
        assert_eq!(path.cost, 8.0);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let path = solve(5, 4, &ENERGY_DATA, Direction::Horizontal);
        // Column 0 is flat; the relaxation keeps the route through the
        // last row that reaches (1, 1) first.
        assert_eq!(path.seam, vec![2, 1, 0, 1, 2]);
        assert_eq!(path.cost, 9.0 + 1.0 + 0.0 + 8.0 + 0.0);
    }

    #[test]
    fn seams_follow_a_cheap_diagonal() {
        #[rustfmt::skip]
        let real = [
            5.0, 0.0, 5.0, 5.0,
            5.0, 5.0, 0.0, 5.0,
            5.0, 5.0, 5.0, 0.0,
        ];
        let path = solve(4, 3, &real, Direction::Vertical);
        assert_eq!(path.seam, vec![1, 2, 3]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn single_pixel_picture() {
        let path = solve(1, 1, &[42.0], Direction::Vertical);
        assert_eq!(path.seam, vec![0]);
        assert_eq!(path.cost, 42.0);
        let path = solve(1, 1, &[42.0], Direction::Horizontal);
        assert_eq!(path.seam, vec![0]);
    }

    #[test]
    fn ties_keep_the_first_route_found() {
        let flat = [1.0; 9];
        let first = solve(3, 3, &flat, Direction::Vertical);
        let again = solve(3, 3, &flat, Direction::Vertical);
        assert_eq!(first, again);
        assert_eq!(first.seam, vec![2, 2, 2]);
        assert_eq!(first.cost, 3.0);
    }
}
