// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The engine's private copy of the picture
//!
//! The seam engine never reads the caller's image after construction.
//! Whatever `GenericImageView` it is handed is flattened into an owned
//! 8-bit RGB buffer, so later edits to the original cannot leak into a
//! cached energy map or an in-flight seam query.

use crate::error::{Result, SeamError};
use image::{GenericImageView, Pixel, Primitive, Rgb, RgbImage};
use num_traits::NumCast;

/// An owned, read-only, three-channel 8-bit snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pixels: RgbImage,
}

impl Picture {
    /// Snapshot any image view whose pixels convert to RGB.  The
    /// subpixel type must span exactly `0..=255` (in practice, `u8`);
    /// wider or floating-point channels are rejected rather than
    /// narrowed, as is a zero-sized image.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        check_dimensions(width, height)?;
        if <u8 as NumCast>::from(S::DEFAULT_MAX_VALUE) != Some(u8::MAX) {
            return Err(SeamError::invalid(
                "picture channels must be 8-bit, with 255 as full intensity",
            ));
        }

        let mut pixels = RgbImage::new(width, height);
        for (x, y, pixel) in image.pixels() {
            let rgb = pixel.to_rgb();
            let mut channels = [0u8; 3];
            for (target, source) in channels.iter_mut().zip(rgb.0.iter()) {
                *target = NumCast::from(*source).ok_or_else(|| {
                    SeamError::invalid(format!("pixel ({}, {}) is not an 8-bit colour", x, y))
                })?;
            }
            pixels.put_pixel(x, y, Rgb(channels));
        }
        Ok(Picture { pixels })
    }

    /// Wrap packed `R G B` bytes, row-major.  The buffer must hold
    /// exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(SeamError::invalid(format!(
                "a {}x{} picture needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        RgbImage::from_raw(width, height, data)
            .map(|pixels| Picture { pixels })
            .ok_or_else(|| SeamError::invalid("pixel buffer does not match its dimensions"))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// The red, green and blue channels of a real pixel.
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    /// The snapshot as an `image` buffer, for saving or rendering.
    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        Err(SeamError::invalid(format!(
            "picture must be at least 1x1, got {}x{}",
            width, height
        )))
    } else {
        Ok(())
    }
}
