//! Pixel canvas for painting rasterizer output.
//!
//! A plain row-major RGBA buffer. Rasterizers emit pixels in signed grid
//! coordinates; anything outside the canvas is skipped when painting.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.pixel_index(x, y)?;
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Paint every pixel of a rasterized sequence, returning how many landed
    /// inside the canvas.
    pub fn paint(&mut self, pixels: &[Point], color: Rgba) -> usize {
        let mut painted = 0;
        for p in pixels {
            if let Some(idx) = self.pixel_index(p.x, p.y) {
                self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
                painted += 1;
            }
        }
        painted
    }

    /// Byte offset of `(x, y)`, or `None` outside the canvas.
    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(((y as usize) * (self.width as usize) + x as usize) * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixels().len(), 100 * 50 * 4);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        fb.set_pixel(-1, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.get_pixel(-1, 5), None);
    }

    #[test]
    fn test_paint_skips_out_of_bounds() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        let pixels = [Point::new(-1, 0), Point::new(0, 0), Point::new(3, 3), Point::new(4, 3)];

        assert_eq!(fb.paint(&pixels, Rgba::BLACK), 2);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::WHITE));
    }
}
