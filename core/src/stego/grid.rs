//! stego/grid.rs
//! Pixel access boundary for the bit codec.
//!
//! The codec never decodes or encodes image formats; it reads and writes one
//! 8-bit carrier sample per pixel through this trait.

use image::{ImageBuffer, Pixel};

use crate::constants::CARRIER_CHANNEL_RGB;

/// Row-major grid of pixels exposing one carrier sample per pixel.
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Carrier sample of the pixel at (x, y).
    fn sample(&self, x: u32, y: u32) -> u8;

    /// Overwrite the carrier sample of the pixel at (x, y).
    fn set_sample(&mut self, x: u32, y: u32, value: u8);

    fn pixel_count(&self) -> usize {
        (self.width() as usize).saturating_mul(self.height() as usize)
    }
}

/// Carrier channel for a pixel layout: blue when present, else the first channel.
#[inline]
pub fn carrier_index<P: Pixel>() -> usize {
    if P::CHANNEL_COUNT as usize > CARRIER_CHANNEL_RGB {
        CARRIER_CHANNEL_RGB
    } else {
        0
    }
}

impl<P> PixelGrid for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn sample(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).channels()[carrier_index::<P>()]
    }

    fn set_sample(&mut self, x: u32, y: u32, value: u8) {
        self.get_pixel_mut(x, y).channels_mut()[carrier_index::<P>()] = value;
    }
}
