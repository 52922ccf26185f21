// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam lattice
//!
//! A picture is treated as a directed acyclic graph that is never
//! materialized: every pixel points at the two or three pixels a seam
//! may step to next, and four sentinel nodes outside the picture act as
//! the common start and end of every seam.  A vertical seam runs from
//! `Top` to `Bottom`, a horizontal seam from `Left` to `Right`.
//!
//! The sentinels sit on the spare row and column of the energy grid:
//!
//! ```text
//!   Top    = (width, 0)       Left  = (0, height)
//!   Bottom = (width, height)  Right = (width, height)
//! ```
//!
//! `Bottom` and `Right` share a slot.  That's fine inside one traversal,
//! because a traversal only ever uses the sentinels of its own
//! direction, but it means nodes are compared by identity (the `Node`
//! enum), never by slot.

use crate::error::{Result, SeamError};
use crate::picture::Picture;
use std::fmt;

/// Which way a seam runs.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Direction {
    /// Left to right, one pixel per column.
    Horizontal,
    /// Top to bottom, one pixel per row.
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(cq!(*self == Direction::Horizontal, "horizontal", "vertical"))
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Sentinel {
    Top,
    Bottom,
    Left,
    Right,
}

/// A vertex of the seam lattice: a real pixel, or one of the sentinels.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Node {
    Pixel(u32, u32),
    Sentinel(Sentinel),
}

/// The geometry of one picture's lattice, and the rules for walking it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Lattice {
    width: u32,
    height: u32,
}

impl Lattice {
    /// The lattice for a `width × height` picture.  A picture with no
    /// rows or no columns has no seams, so either being zero is an
    /// `InvalidArgument`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::invalid(format!(
                "a seam lattice must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        Ok(Lattice { width, height })
    }

    // A `Picture` is never empty, so this can't fail.
    pub(crate) fn of(picture: &Picture) -> Self {
        let (width, height) = picture.dimensions();
        Lattice { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Where every seam in `direction` starts.
    pub fn source(&self, direction: Direction) -> Node {
        match direction {
            Direction::Horizontal => Node::Sentinel(Sentinel::Left),
            Direction::Vertical => Node::Sentinel(Sentinel::Top),
        }
    }

    /// Where every seam in `direction` ends.
    pub fn sink(&self, direction: Direction) -> Node {
        match direction {
            Direction::Horizontal => Node::Sentinel(Sentinel::Right),
            Direction::Vertical => Node::Sentinel(Sentinel::Bottom),
        }
    }

    /// The cell of the `(width + 1) × (height + 1)` grids this node
    /// occupies.
    pub fn slot(&self, node: Node) -> (u32, u32) {
        match node {
            Node::Pixel(x, y) => (x, y),
            Node::Sentinel(Sentinel::Top) => (self.width, 0),
            Node::Sentinel(Sentinel::Bottom) => (self.width, self.height),
            Node::Sentinel(Sentinel::Left) => (0, self.height),
            Node::Sentinel(Sentinel::Right) => (self.width, self.height),
        }
    }

    /// The nodes `node` has edges to when walking in `direction`, in a
    /// fixed order: the shortest path keeps the first of several equal
    /// routes, so this order is what makes seams reproducible.
    pub fn successors(&self, node: Node, direction: Direction) -> Vec<Node> {
        let (mw, mh) = (self.width - 1, self.height - 1);
        match (direction, node) {
            (Direction::Horizontal, Node::Sentinel(Sentinel::Left)) => {
                (0..self.height).map(|y| Node::Pixel(0, y)).collect()
            }
            (Direction::Vertical, Node::Sentinel(Sentinel::Top)) => {
                (0..self.width).map(|x| Node::Pixel(x, 0)).collect()
            }
            (_, Node::Sentinel(_)) => Vec::new(),

            (Direction::Horizontal, Node::Pixel(x, _)) if x == mw => {
                vec![Node::Sentinel(Sentinel::Right)]
            }
            (Direction::Horizontal, Node::Pixel(x, y)) => {
                let (first, last) = (cq!(y == 0, y, y - 1), cq!(y == mh, y, y + 1));
                (first..=last).map(|ny| Node::Pixel(x + 1, ny)).collect()
            }

            (Direction::Vertical, Node::Pixel(_, y)) if y == mh => {
                vec![Node::Sentinel(Sentinel::Bottom)]
            }
            (Direction::Vertical, Node::Pixel(x, y)) => {
                let (first, last) = (cq!(x == 0, x, x - 1), cq!(x == mw, x, x + 1));
                (first..=last).map(|nx| Node::Pixel(nx, y + 1)).collect()
            }
        }
    }
}
