//! The pixel-write half of the display-surface contract, plus an
//! in-memory framebuffer that satisfies it.
//!
//! Workers never talk to a window directly; they only need somewhere to
//! put pixel colors.  The [`FrameBuffer`] holds them as packed RGB
//! bytes so a display frontend can upload the whole thing to a
//! streaming texture in one call.

use crate::color::Rgb;

/// Destination for pixel-color writes.
pub trait PixelSink {
    /// Writes one pixel.  Coordinates outside the raster are ignored,
    /// matching how a clipping renderer treats out-of-window draws.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb);
}

/// Packed RGB24 pixel store for one raster, row-major, starting black.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a black framebuffer of the given dimensions.
    pub fn new(width: u32, height: u32) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, for texture upload.
    pub fn pitch(&self) -> usize {
        self.width as usize * 3
    }

    /// The raw RGB24 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads back one pixel, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgb {
            r: self.pixels[i],
            g: self.pixels[i + 1],
            b: self.pixels[i + 2],
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
    }
}
