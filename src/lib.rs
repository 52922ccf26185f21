// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam identification for content-aware resizing.
//!
//! A picture's pixels form a directed acyclic graph: each pixel points
//! at the pixels a seam may step to next, and sentinel nodes outside
//! the picture start and end every seam.  The cheapest seam is the
//! shortest path through that graph, weighted by each pixel's energy.
//!
//! ```no_run
//! use dagseam::{SeamCarver, SeamFinder};
//!
//! let image = image::open("tower.png").unwrap().to_rgb8();
//! let carver = SeamCarver::new(&image).unwrap();
//! let columns = carver.find_vertical_seam();
//! assert_eq!(columns.len(), image.height() as usize);
//! ```

#[macro_use]
mod ternary;

pub mod dump;
pub mod energy;
pub mod error;
pub mod lattice;
pub mod picture;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod shortest;
pub mod topological;
pub mod twodmap;

pub use energy::BORDER_ENERGY;
pub use error::SeamError;
pub use lattice::Direction;
pub use picture::Picture;
pub use seam::{check_seam, seam_energy};
pub use seamcarver::SeamCarver;
pub use seamfinder::SeamFinder;
pub use shortest::SeamPath;
