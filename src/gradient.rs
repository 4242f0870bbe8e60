// Intensity (0..=255) -> color, by linear interpolation between two endpoints.
// Visual: dim neurons look dark gray, strong neurons look saturated blue.

use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGradient {
    pub low: Color,
    pub high: Color,
}

impl ColorGradient {
    /// Dark gray (20,20,20) to blue (0,0,255). Used for neuron fills.
    pub const NEURON: ColorGradient = ColorGradient {
        low: Color::rgb(20, 20, 20),
        high: Color::rgb(0, 0, 255),
    };

    /// Muted gray to light steel. Used for weighted synapses.
    pub const SYNAPSE: ColorGradient = ColorGradient {
        low: Color::rgb(0x30, 0x30, 0x30),
        high: Color::rgb(0xB0, 0xC8, 0xFF),
    };

    pub const fn new(low: Color, high: Color) -> Self {
        Self { low, high }
    }

    /// Each channel is `round(low + t * (high - low))` with `t = intensity / 255`.
    /// Alpha is always opaque.
    pub fn color_at(&self, intensity: u8) -> Color {
        let t = intensity as f64 / 255.0;
        Color::rgba(
            lerp_channel(self.low.r, self.high.r, t),
            lerp_channel(self.low.g, self.high.g, t),
            lerp_channel(self.low.b, self.high.b, t),
            255,
        )
    }

    /// Precompute all 256 colors once; lookups are then a plain index.
    pub fn table(&self) -> GradientTable {
        let mut colors = [self.low; 256];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = self.color_at(i as u8);
        }
        GradientTable { colors }
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::NEURON
    }
}

#[inline]
fn lerp_channel(low: u8, high: u8, t: f64) -> u8 {
    let v = low as f64 + t * (high as f64 - low as f64);
    // Channels stay non-negative, so `round` is round-half-up here.
    v.round().clamp(0.0, 255.0) as u8
}

/// 256-entry lookup built from a `ColorGradient`.
#[derive(Clone)]
pub struct GradientTable {
    colors: [Color; 256],
}

impl GradientTable {
    #[inline]
    pub fn get(&self, intensity: u8) -> Color {
        self.colors[intensity as usize]
    }
}
