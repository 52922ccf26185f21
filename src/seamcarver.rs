// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SeamCarver - the front door
//!
//! Holds a private snapshot of one picture and answers seam queries
//! about it.  The energy map is the only thing worth keeping between
//! queries; it is built on the first query, shared by both directions,
//! and lives as long as the carver.  Everything a query needs beyond
//! that (visited marks, order, distances, predecessors) is built and
//! dropped inside the query, so a carver can be shared between threads.
//!
//! A new picture means a new carver.

use crate::energy::compute_energy;
use crate::error::{Result, SeamError};
use crate::lattice::{Direction, Lattice};
use crate::picture::Picture;
use crate::seamfinder::SeamFinder;
use crate::shortest::{shortest_seam, SeamPath};
use crate::topological::topological_order;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use std::sync::OnceLock;
use tracing::debug;

/// A seam engine for one picture.
#[derive(Debug)]
pub struct SeamCarver {
    picture: Picture,
    lattice: Lattice,
    energy: OnceLock<TwoDimensionalMap<f64>>,
}

impl SeamCarver {
    /// Snapshot `image` and get ready to find seams in it.  Fails with
    /// `InvalidArgument` for an empty image, or one whose channels are
    /// not 8-bit (`u16` and `f32` images included, whatever their
    /// values).
    pub fn new<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        Picture::from_image(image).map(SeamCarver::from_picture)
    }

    pub fn from_picture(picture: Picture) -> Self {
        let lattice = Lattice::of(&picture);
        SeamCarver {
            picture,
            lattice,
            energy: OnceLock::new(),
        }
    }

    /// The carver's own copy of the picture, not the caller's.
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn width(&self) -> u32 {
        self.lattice.width()
    }

    pub fn height(&self) -> u32 {
        self.lattice.height()
    }

    /// The energy of `(x, y)`.  The column `x == width` and the row
    /// `y == height` hold the sentinels and are always zero; anything
    /// past them is `IndexOutOfRange`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        self.energy_map()
            .get(x, y)
            .ok_or(SeamError::IndexOutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// The whole cached energy grid, sentinel row and column included.
    pub fn energy_map(&self) -> &TwoDimensionalMap<f64> {
        self.energy.get_or_init(|| {
            debug!(
                width = self.width(),
                height = self.height(),
                "computing energy map"
            );
            compute_energy(&self.picture)
        })
    }

    /// The cheapest seam in `direction`, with its cost.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(width = self.width(), height = self.height())
    )]
    pub fn find_seam(&self, direction: Direction) -> SeamPath {
        let energy = self.energy_map();
        let order = topological_order(&self.lattice, direction);
        let path = shortest_seam(&self.lattice, energy, &order, direction);
        debug!(cost = path.cost, length = path.seam.len(), "found seam");
        path
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.find_seam(Direction::Horizontal).seam
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        self.find_seam(Direction::Vertical).seam
    }
}
