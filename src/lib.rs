//! Live 2D diagram of a feed-forward network: neurons as filled circles
//! colored by activation, synapses as translucent lines between layers.
//!
//! Typical frame: build a [`Network`], hand it to [`NetworkRenderer::render`]
//! together with any [`Surface`] (a [`GraphicsContext`] window, or a
//! [`FrameSurface`] for headless use).

pub mod error;
pub mod gradient;
pub mod layout;
pub mod mapper;
pub mod network;
pub mod raster;
pub mod renderer;
pub mod snapshot;
pub mod style;
pub mod surface;
pub mod types;
pub mod window;

pub use error::{Result, VizError};
pub use gradient::{ColorGradient, GradientTable};
pub use layout::{NetworkLayout, NeuronPlacement, SynapseSegment};
pub use mapper::Domain;
pub use network::{Activations, Layer, Network};
pub use renderer::NetworkRenderer;
pub use style::Style;
pub use surface::{FrameSurface, Surface};
pub use types::{Canvas, Color, FrameBuffer, Point};
pub use window::{GraphicsContext, WindowConfig};
