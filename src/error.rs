// Error type for the whole crate.
// Every variant states *where* things went wrong.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    /// Empty network, empty layer, or a length that disagrees with a declared count.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// Mapping domain with `min >= max` (or a non-finite bound).
    #[error("invalid domain: min {min} must be below max {max}")]
    InvalidDomain { min: f64, max: f64 },

    /// Canvas with a zero side.
    #[error("invalid canvas: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Creating the drawing surface (window) failed
    #[error("surface init error: {0}")]
    SurfaceInit(String),

    /// Pushing a frame to the surface failed
    #[error("surface update error: {0}")]
    SurfaceUpdate(String),

    /// Encoding or writing a PNG snapshot failed
    #[error("snapshot error: {0}")]
    Snapshot(#[from] image::ImageError),
}

impl VizError {
    /// True for failures reported by the host drawing collaborator.
    pub fn is_surface_failure(&self) -> bool {
        matches!(self, VizError::SurfaceInit(_) | VizError::SurfaceUpdate(_))
    }
}
