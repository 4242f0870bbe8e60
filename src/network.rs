// Logical network description: ordered layers, per-neuron values, optional weights.
// Built once and validated; the caller may swap activations between frames.

use crate::error::{Result, VizError};
use crate::mapper::Domain;

/// Per-neuron values of one layer, either raw or already on the 0..=255 scale.
#[derive(Debug, Clone, PartialEq)]
pub enum Activations {
    Raw(Vec<f64>),
    Intensity(Vec<u8>),
}

impl Activations {
    pub fn len(&self) -> usize {
        match self {
            Activations::Raw(v) => v.len(),
            Activations::Intensity(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Intensity of neuron `j`; raw values go through `domain`.
    #[inline]
    pub fn intensity(&self, j: usize, domain: &Domain) -> u8 {
        match self {
            Activations::Raw(v) => domain.intensity(v[j]),
            Activations::Intensity(v) => v[j],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: usize,
    activations: Activations,
    // weights[j][k]: neuron j here -> neuron k in the next layer
    weights: Option<Vec<Vec<f64>>>,
}

impl Layer {
    /// Fails when `neurons == 0` or the activation count disagrees with it.
    pub fn new(neurons: usize, activations: Activations) -> Result<Self> {
        check_activations(neurons, &activations)?;
        Ok(Self { neurons, activations, weights: None })
    }

    pub fn raw(values: Vec<f64>) -> Result<Self> {
        Self::new(values.len(), Activations::Raw(values))
    }

    pub fn intensities(values: Vec<u8>) -> Result<Self> {
        Self::new(values.len(), Activations::Intensity(values))
    }

    /// Attach synapse weights towards the next layer. Shape is checked by `Network::new`.
    pub fn with_weights(mut self, weights: Vec<Vec<f64>>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn neurons(&self) -> usize {
        self.neurons
    }

    pub fn activations(&self) -> &Activations {
        &self.activations
    }

    pub fn weights(&self) -> Option<&[Vec<f64>]> {
        self.weights.as_deref()
    }

    /// Weight of the synapse j -> k, if this layer carries weights.
    pub fn weight(&self, j: usize, k: usize) -> Option<f64> {
        self.weights.as_ref().map(|w| w[j][k])
    }
}

fn check_activations(neurons: usize, activations: &Activations) -> Result<()> {
    if neurons == 0 {
        return Err(VizError::InvalidTopology("layer must have at least one neuron".into()));
    }
    if activations.len() != neurons {
        return Err(VizError::InvalidTopology(format!(
            "layer declares {neurons} neurons but has {} activation values",
            activations.len()
        )));
    }
    Ok(())
}

/// Ordered layers, left to right. Always holds at least one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    pub fn new(layers: Vec<Layer>) -> Result<Self> {
        if layers.is_empty() {
            return Err(VizError::InvalidTopology("number of layers must be > 0, got 0".into()));
        }

        for (i, layer) in layers.iter().enumerate() {
            let Some(weights) = &layer.weights else { continue };
            let Some(next) = layers.get(i + 1) else {
                return Err(VizError::InvalidTopology(format!(
                    "output layer {i} cannot carry synapse weights"
                )));
            };
            if weights.len() != layer.neurons
                || weights.iter().any(|row| row.len() != next.neurons)
            {
                return Err(VizError::InvalidTopology(format!(
                    "layer {i} weights must be {}x{}",
                    layer.neurons, next.neurons
                )));
            }
        }

        Ok(Self { layers })
    }

    /// One layer per entry, every activation raw 0.0.
    pub fn from_sizes(sizes: &[usize]) -> Result<Self> {
        let layers = sizes
            .iter()
            .map(|&n| Layer::new(n, Activations::Raw(vec![0.0; n])))
            .collect::<Result<Vec<_>>>()?;
        Self::new(layers)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn neuron_count(&self) -> usize {
        self.layers.iter().map(|l| l.neurons).sum()
    }

    /// Sum of n_i * n_{i+1}: one synapse per neuron pair of adjacent layers.
    pub fn synapse_count(&self) -> usize {
        self.layers.windows(2).map(|w| w[0].neurons * w[1].neurons).sum()
    }

    /// Replace one layer's values; the count must still match.
    pub fn set_activations(&mut self, layer: usize, activations: Activations) -> Result<()> {
        let count = self.layers.len();
        let target = self.layers.get_mut(layer).ok_or_else(|| {
            VizError::InvalidTopology(format!("layer {layer} out of range ({count} layers)"))
        })?;
        check_activations(target.neurons, &activations)?;
        target.activations = activations;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_network_is_rejected() {
        assert!(matches!(Network::new(vec![]), Err(VizError::InvalidTopology(_))));
        assert!(matches!(Network::from_sizes(&[]), Err(VizError::InvalidTopology(_))));
    }

    #[test]
    fn mismatched_activation_count_is_rejected() {
        let err = Layer::new(3, Activations::Raw(vec![0.0, 1.0])).unwrap_err();
        assert!(matches!(err, VizError::InvalidTopology(_)));
        assert!(Layer::new(0, Activations::Intensity(vec![])).is_err());
        assert!(Network::from_sizes(&[2, 0, 1]).is_err());
    }

    #[test]
    fn counts_follow_layer_sizes() {
        let net = Network::from_sizes(&[2, 3, 1]).unwrap();
        assert_eq!(net.layer_count(), 3);
        assert_eq!(net.neuron_count(), 6);
        assert_eq!(net.synapse_count(), 2 * 3 + 3 * 1);
    }

    #[test]
    fn weights_shape_is_checked() {
        let ok = Network::new(vec![
            Layer::raw(vec![0.0, 0.0]).unwrap().with_weights(vec![vec![1.0], vec![-1.0]]),
            Layer::raw(vec![0.0]).unwrap(),
        ]);
        assert_eq!(ok.unwrap().layers()[0].weight(1, 0), Some(-1.0));

        let wrong_cols = Network::new(vec![
            Layer::raw(vec![0.0, 0.0]).unwrap().with_weights(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            Layer::raw(vec![0.0]).unwrap(),
        ]);
        assert!(matches!(wrong_cols, Err(VizError::InvalidTopology(_))));

        let on_output = Network::new(vec![Layer::raw(vec![0.0]).unwrap().with_weights(vec![vec![]])]);
        assert!(matches!(on_output, Err(VizError::InvalidTopology(_))));
    }

    #[test]
    fn activations_can_be_swapped_between_frames() {
        let mut net = Network::from_sizes(&[2, 1]).unwrap();
        net.set_activations(0, Activations::Intensity(vec![10, 20])).unwrap();
        assert_eq!(net.layers()[0].activations().intensity(1, &Domain::DEFAULT), 20);

        assert!(net.set_activations(1, Activations::Raw(vec![1.0, 2.0])).is_err());
        assert!(net.set_activations(5, Activations::Raw(vec![1.0])).is_err());
        // failed updates leave the old values in place
        assert_eq!(net.layers()[1].activations(), &Activations::Raw(vec![0.0]));
    }
}
