// On-screen surface: a minifb window plus the software frame it displays.
// Acquire once at startup, render many frames, release exactly once on drop.

use minifb::{Key, Window, WindowOptions};
use tracing::info;

use crate::error::{Result, VizError};
use crate::surface::{FrameSurface, Surface};
use crate::types::{Canvas, Color, Point};

/// Title, optional screen position and size of the window.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub position: Option<(isize, isize)>,
    pub canvas: Canvas,
    /// Frame cap applied by minifb's `update_with_buffer`; 0 disables it.
    pub target_fps: usize,
}

impl WindowConfig {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            title: "neural network".to_string(),
            position: None,
            canvas,
            target_fps: 60,
        }
    }
}

pub struct GraphicsContext {
    window: Window,      // the on-screen window you see
    surface: FrameSurface,
}

impl GraphicsContext {
    /// Open the window.
    /// Visual: a new window of the requested size appears, still black.
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let Canvas { width, height } = config.canvas;
        let mut window = Window::new(&config.title, width as usize, height as usize, WindowOptions::default())
            .map_err(|e| VizError::SurfaceInit(e.to_string()))?;
        if let Some((x, y)) = config.position {
            window.set_position(x, y);
        }
        window.set_target_fps(config.target_fps);
        info!(title = %config.title, width, height, "graphics context acquired");
        Ok(Self { window, surface: FrameSurface::new(config.canvas) })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// The last frame drawn (also what is on screen after `present`).
    pub fn surface(&self) -> &FrameSurface {
        &self.surface
    }
}

impl Surface for GraphicsContext {
    fn canvas(&self) -> Canvas {
        self.surface.canvas()
    }

    fn set_draw_color(&mut self, color: Color) -> Result<()> {
        self.surface.set_draw_color(color)
    }

    fn clear(&mut self) -> Result<()> {
        self.surface.clear()
    }

    fn draw_point(&mut self, p: Point) -> Result<()> {
        self.surface.draw_point(p)
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<()> {
        self.surface.draw_line(from, to)
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new network image.
    fn present(&mut self) -> Result<()> {
        let frame = self.surface.frame();
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| VizError::SurfaceUpdate(e.to_string()))?;
        self.surface.mark_presented();
        Ok(())
    }
}

impl Drop for GraphicsContext {
    // minifb closes the native window when `Window` drops right after this.
    fn drop(&mut self) {
        info!(frames = self.surface.presented(), "graphics context released");
    }
}
