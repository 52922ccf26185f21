// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Topological order of the seam lattice
//!
//! A depth-first search that records each node as it finishes, then
//! reverses the record.  The lattice of a large photograph is millions
//! of nodes deep along some paths, so the search keeps its own stack of
//! frames, each with a cursor into the node's successor list, instead
//! of recursing.

use crate::lattice::{Direction, Lattice, Node};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use tracing::trace;

// A node being explored, and how many of its successors have been
// handed out so far.
struct Frame {
    node: Node,
    successors: Vec<Node>,
    cursor: usize,
}

struct DepthFirst<'a> {
    lattice: &'a Lattice,
    direction: Direction,
    visited: TwoDimensionalMap<bool>,
    finished: Vec<Node>,
}

impl<'a> DepthFirst<'a> {
    fn new(lattice: &'a Lattice, direction: Direction) -> Self {
        DepthFirst {
            lattice,
            direction,
            visited: TwoDimensionalMap::new(lattice.width() + 1, lattice.height() + 1),
            finished: Vec::with_capacity(lattice.width() as usize * lattice.height() as usize + 2),
        }
    }

    fn is_visited(&self, node: Node) -> bool {
        self.visited[self.lattice.slot(node)]
    }

    fn enter(&mut self, node: Node) -> Frame {
        let slot = self.lattice.slot(node);
        self.visited[slot] = true;
        Frame {
            node,
            successors: self.lattice.successors(node, self.direction),
            cursor: 0,
        }
    }

    fn search_from(&mut self, root: Node) {
        if self.is_visited(root) {
            return;
        }
        let mut stack = vec![self.enter(root)];
        while let Some(frame) = stack.last_mut() {
            match frame.successors.get(frame.cursor).copied() {
                Some(next) => {
                    frame.cursor += 1;
                    if !self.is_visited(next) {
                        let child = self.enter(next);
                        stack.push(child);
                    }
                }
                None => {
                    self.finished.push(frame.node);
                    stack.pop();
                }
            }
        }
    }
}

/// Every real pixel plus the two sentinels of `direction`, ordered so
/// that each edge of the lattice points forward.  The search starts at
/// the direction's source sentinel and then sweeps any pixel it hasn't
/// reached, row by row.  For a given picture size the order is always
/// the same.
pub fn topological_order(lattice: &Lattice, direction: Direction) -> Vec<Node> {
    let mut search = DepthFirst::new(lattice, direction);
    search.search_from(lattice.source(direction));
    for (y, x) in iproduct!(0..lattice.height(), 0..lattice.width()) {
        search.search_from(Node::Pixel(x, y));
    }

    let mut order = search.finished;
    order.reverse();
    trace!(%direction, nodes = order.len(), "topological order");
    order
}
