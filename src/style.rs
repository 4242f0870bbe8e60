// Fixed look of a rendered network. `Style::default()` is the canonical scheme;
// the `with_*` setters exist for hosts that want a different palette or margin.

use crate::gradient::ColorGradient;
use crate::mapper::Domain;
use crate::types::{Color, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Clear color of every frame.
    pub background: Color,
    /// Line color for synapses without weights.
    pub synapse: Color,
    pub neuron_gradient: ColorGradient,
    /// Used instead of `synapse` when a layer carries weights.
    pub synapse_gradient: ColorGradient,
    /// Domain for raw activations and weights.
    pub domain: Domain,
    /// Added to every neuron center.
    pub origin: Point,
    /// Neuron radius is `1 + radius_budget / n` for a layer of `n` neurons.
    pub radius_budget: u32,
}

impl Style {
    pub const BACKGROUND: Color = Color::rgba(20, 40, 50, 255);
    pub const SYNAPSE: Color = Color::rgba(0x55, 0x55, 0x55, 80);
    pub const RADIUS_BUDGET: u32 = 100;

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_synapse(mut self, color: Color) -> Self {
        self.synapse = color;
        self
    }

    pub fn with_neuron_gradient(mut self, gradient: ColorGradient) -> Self {
        self.neuron_gradient = gradient;
        self
    }

    pub fn with_synapse_gradient(mut self, gradient: ColorGradient) -> Self {
        self.synapse_gradient = gradient;
        self
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_radius_budget(mut self, budget: u32) -> Self {
        self.radius_budget = budget;
        self
    }

    /// Neuron radius for a layer of `neurons` (> 0). Never below 1.
    #[inline]
    pub fn neuron_radius(&self, neurons: usize) -> u32 {
        1 + (self.radius_budget as usize / neurons.max(1)) as u32
    }

    /// Line color of one synapse. Weighted lines take their color from the
    /// synapse gradient and grow more opaque with intensity.
    pub fn synapse_color(&self, weight: Option<f64>) -> Color {
        match weight {
            None => self.synapse,
            Some(w) => {
                let i = self.domain.intensity(w);
                let mut c = self.synapse_gradient.color_at(i);
                c.a = 48 + ((i as u32 * 207 + 127) / 255) as u8;
                c
            }
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Self::BACKGROUND,
            synapse: Self::SYNAPSE,
            neuron_gradient: ColorGradient::NEURON,
            synapse_gradient: ColorGradient::SYNAPSE,
            domain: Domain::DEFAULT,
            origin: Point::ORIGIN,
            radius_budget: Self::RADIUS_BUDGET,
        }
    }
}
