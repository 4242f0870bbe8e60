// Headless export: turn a rendered frame into an RGB image and write a PNG.

use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use tracing::info;

use crate::error::Result;
use crate::types::FrameBuffer;

/// Unpack 0x00RRGGBB pixels into an `RgbImage` of the same size.
pub fn to_rgb_image(frame: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(frame.width as u32, frame.height as u32, |x, y| {
        let px = frame.pixels[y as usize * frame.width + x as usize];
        Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
    })
}

pub fn save_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    to_rgb_image(frame).save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), width = frame.width, height = frame.height, "snapshot written");
    Ok(())
}
