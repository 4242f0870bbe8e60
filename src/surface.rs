// The drawing API the renderer needs from its host, and an in-memory
// implementation of it that draws into a `FrameBuffer`.
// Visual: points and lines blend over what is already there (src-over alpha);
// `clear` paints the whole frame opaquely.

use crate::error::Result;
use crate::raster::line_pixels;
use crate::types::{Canvas, Color, FrameBuffer, Point};

/// Host drawing collaborator. Creation is the implementor's constructor and
/// destruction is its `Drop`.
pub trait Surface {
    /// Pixel size of the drawable area.
    fn canvas(&self) -> Canvas;

    /// Color (with alpha) for the following primitives.
    fn set_draw_color(&mut self, color: Color) -> Result<()>;

    /// Fill the whole surface with the current draw color.
    fn clear(&mut self) -> Result<()>;

    fn draw_point(&mut self, p: Point) -> Result<()>;

    fn draw_line(&mut self, from: Point, to: Point) -> Result<()>;

    /// Flush buffered draws to the visible display.
    fn present(&mut self) -> Result<()>;
}

/// Software surface. `present` only counts frames; a window pushes them on screen.
pub struct FrameSurface {
    frame: FrameBuffer,
    color: Color,
    presented: u64,
}

impl FrameSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            frame: FrameBuffer::new(canvas),
            color: Color::rgb(0, 0, 0),
            presented: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn into_frame(self) -> FrameBuffer {
        self.frame
    }

    pub fn draw_color(&self) -> Color {
        self.color
    }

    /// How many frames have been presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub(crate) fn mark_presented(&mut self) {
        self.presented += 1;
    }

    /// Blend the current color into (x,y) if it is inside the frame.
    #[inline]
    fn blend_pixel(&mut self, p: Point) {
        let Some(idx) = self.frame.index_of(p) else { return };
        self.frame.pixels[idx] = blend_over(self.frame.pixels[idx], self.color);
    }
}

impl Surface for FrameSurface {
    fn canvas(&self) -> Canvas {
        Canvas { width: self.frame.width as u32, height: self.frame.height as u32 }
    }

    fn set_draw_color(&mut self, color: Color) -> Result<()> {
        self.color = color;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let px = self.color.to_rgb_u32();
        self.frame.pixels.fill(px);
        Ok(())
    }

    fn draw_point(&mut self, p: Point) -> Result<()> {
        self.blend_pixel(p);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<()> {
        for p in line_pixels(from, to) {
            self.blend_pixel(p);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.mark_presented();
        Ok(())
    }
}

/// Source-over blend of `src` onto an opaque 0x00RRGGBB pixel.
#[inline]
pub fn blend_over(dst: u32, src: Color) -> u32 {
    match src.a {
        255 => src.to_rgb_u32(),
        0 => dst,
        a => {
            let d = Color::from_rgb_u32(dst);
            let a = a as u32;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
            Color::rgb(mix(src.r, d.r), mix(src.g, d.g), mix(src.b, d.b)).to_rgb_u32()
        }
    }
}
