// Core value types shared by layout, raster and the surfaces.

use crate::error::{Result, VizError};

/// Pixel area available for drawing. Both sides are > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VizError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Integer pixel coordinate. May lie outside the canvas; drawing clips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// RGBA color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack as 0x00RRGGBB (alpha dropped), the layout minifb expects.
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack a 0x00RRGGBB pixel into an opaque color.
    #[inline]
    pub fn from_rgb_u32(px: u32) -> Self {
        Self::rgb(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Black frame of the canvas size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width as usize,
            height: canvas.height as usize,
            pixels: vec![0u32; canvas.pixel_count()],
        }
    }

    /// Index of (x,y), or None when outside the frame.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn pixel(&self, p: Point) -> Option<u32> {
        self.index_of(p).map(|i| self.pixels[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sided_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0, 10), Err(VizError::InvalidCanvas { .. })));
        assert!(matches!(Canvas::new(10, 0), Err(VizError::InvalidCanvas { .. })));
        assert_eq!(Canvas::new(3, 2).unwrap().pixel_count(), 6);
    }

    #[test]
    fn color_packs_as_rrggbb() {
        let c = Color::rgba(0x12, 0x34, 0x56, 7);
        assert_eq!(c.to_rgb_u32(), 0x0012_3456);
        assert_eq!(Color::from_rgb_u32(0x0012_3456), Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn frame_index_clips_outside_points() {
        let fb = FrameBuffer::new(Canvas::new(4, 3).unwrap());
        assert_eq!(fb.index_of(Point::new(3, 2)), Some(11));
        assert_eq!(fb.index_of(Point::new(4, 0)), None);
        assert_eq!(fb.index_of(Point::new(0, -1)), None);
    }
}
