// Geometry of one frame: where every neuron sits and where every synapse runs.
// Pure integer math; the same network and canvas always give the same layout.
//
// Canvas width is split evenly across layers and each layer's height evenly
// across its neurons. Remainder pixels stay unused on the right/bottom.

use crate::network::Network;
use crate::style::Style;
use crate::types::{Canvas, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeuronPlacement {
    pub layer: usize,
    pub index: usize,
    pub center: Point,
    pub radius: u32,
}

/// Line between neuron `from` in layer `layer` and neuron `to` in layer `layer + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynapseSegment {
    pub layer: usize,
    pub from: usize,
    pub to: usize,
    pub start: Point,
    pub end: Point,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLayout {
    pub canvas: Canvas,
    pub layer_width: u32,
    /// Horizontal center of each layer.
    pub layer_x: Vec<i32>,
    /// `neurons[i][j]` is neuron j of layer i.
    pub neurons: Vec<Vec<NeuronPlacement>>,
    /// Layer by layer; within a layer, source-major then target.
    pub synapses: Vec<SynapseSegment>,
}

impl NetworkLayout {
    pub fn compute(network: &Network, canvas: Canvas, style: &Style) -> Self {
        let layers = network.layers();
        let layer_width = canvas.width / layers.len() as u32;

        let layer_x: Vec<i32> = (0..layers.len())
            .map(|i| style.origin.x + (layer_width / 2) as i32 + (i as u32 * layer_width) as i32)
            .collect();

        let neurons: Vec<Vec<NeuronPlacement>> = layers
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                let n = layer.neurons();
                let neuron_height = canvas.height / n as u32;
                let radius = style.neuron_radius(n);
                (0..n)
                    .map(|j| NeuronPlacement {
                        layer: i,
                        index: j,
                        center: Point::new(
                            layer_x[i],
                            style.origin.y
                                + (neuron_height / 2) as i32
                                + (j as u32 * neuron_height) as i32,
                        ),
                        radius,
                    })
                    .collect()
            })
            .collect();

        let mut synapses = Vec::with_capacity(network.synapse_count());
        for (i, pair) in neurons.windows(2).enumerate() {
            let (here, next) = (&pair[0], &pair[1]);
            for a in here {
                for b in next {
                    synapses.push(SynapseSegment {
                        layer: i,
                        from: a.index,
                        to: b.index,
                        start: a.center,
                        end: b.center,
                        weight: layers[i].weight(a.index, b.index),
                    });
                }
            }
        }

        Self { canvas, layer_width, layer_x, neurons, synapses }
    }

    pub fn neuron(&self, layer: usize, index: usize) -> Option<&NeuronPlacement> {
        self.neurons.get(layer)?.get(index)
    }

    pub fn all_neurons(&self) -> impl Iterator<Item = &NeuronPlacement> {
        self.neurons.iter().flatten()
    }
}
