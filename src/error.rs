// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the seam engine.  Every one of them is a caller
//! mistake, so nothing here is retryable.

use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum SeamError {
    /// The picture or seam handed to the engine cannot be used.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// An energy query fell outside the picture and its sentinel row
    /// and column.
    #[fail(
        display = "({}, {}) is outside the energy grid [0, {}] x [0, {}]",
        x, y, width, height
    )]
    IndexOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl SeamError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        SeamError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SeamError>;
