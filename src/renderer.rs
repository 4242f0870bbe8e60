// Draws a whole network in one synchronous pass:
// clear -> synapse lines -> filled neuron circles -> present.
// Visual: neurons always sit on top of the lines that reach them.

use tracing::debug;

use crate::error::Result;
use crate::gradient::GradientTable;
use crate::layout::NetworkLayout;
use crate::network::Network;
use crate::raster::circle_pixels;
use crate::style::Style;
use crate::surface::Surface;

pub struct NetworkRenderer {
    style: Style,
    neuron_colors: GradientTable,
}

impl NetworkRenderer {
    pub fn new(style: Style) -> Self {
        let neuron_colors = style.neuron_gradient.table();
        Self { style, neuron_colors }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Geometry only; nothing is drawn.
    pub fn layout<S: Surface + ?Sized>(&self, network: &Network, surface: &S) -> NetworkLayout {
        NetworkLayout::compute(network, surface.canvas(), &self.style)
    }

    /// Render one frame of `network` onto `surface` and present it.
    /// Surface errors are returned as-is; the frame may then be partially drawn.
    pub fn render<S: Surface + ?Sized>(
        &self,
        network: &Network,
        surface: &mut S,
    ) -> Result<NetworkLayout> {
        let layout = self.layout(network, surface);
        debug!(
            layers = network.layer_count(),
            neurons = network.neuron_count(),
            synapses = layout.synapses.len(),
            "rendering network"
        );

        // 1) Background
        surface.set_draw_color(self.style.background)?;
        surface.clear()?;

        // 2) Synapses: full bipartite between adjacent layers
        let mut current = None;
        for s in &layout.synapses {
            let color = self.style.synapse_color(s.weight);
            if current != Some(color) {
                surface.set_draw_color(color)?;
                current = Some(color);
            }
            surface.draw_line(s.start, s.end)?;
        }

        // 3) Neurons: mapped intensity -> gradient color -> filled circle
        for (layer, placements) in network.layers().iter().zip(&layout.neurons) {
            for n in placements {
                let intensity = layer.activations().intensity(n.index, &self.style.domain);
                surface.set_draw_color(self.neuron_colors.get(intensity))?;
                for p in circle_pixels(n.center, n.radius) {
                    surface.draw_point(p)?;
                }
            }
        }

        // 4) Flush
        surface.present()?;
        Ok(layout)
    }
}

impl Default for NetworkRenderer {
    fn default() -> Self {
        Self::new(Style::default())
    }
}
