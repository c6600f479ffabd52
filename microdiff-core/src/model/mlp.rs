use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::Module;
use crate::ops::traits::Scalar;
use rand::Rng;

/// Multilayer perceptron: a stack of fully connected [`Layer`]s.
///
/// Layer `i` maps `sizes[i]` inputs to `sizes[i + 1]` outputs where
/// `sizes = [nin] + nouts`. Every layer but the last applies `activation`; the
/// last one is linear so the network can output any real number.
#[derive(Debug, Clone)]
pub struct Mlp<T> {
    layers: Vec<Layer<T>>,
}

impl<T: Scalar> Mlp<T> {
    /// Builds the network, creating all parameters as leaves of `graph`.
    ///
    /// # Errors
    /// `MicrodiffError::InvalidConfig` if `nouts` is empty or any size is 0.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MicrodiffError> {
        if nouts.is_empty() {
            return Err(MicrodiffError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if nin == 0 || nouts.contains(&0) {
            return Err(MicrodiffError::InvalidConfig(format!(
                "layer sizes must be positive, got nin {} and nouts {:?}",
                nin, nouts
            )));
        }

        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let last = nouts.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let act = if i == last { Activation::Linear } else { activation };
                Layer::new(graph, pair[0], pair[1], act, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Created MLP with sizes {:?} ({} parameters)",
            sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    /// Number of inputs the network expects.
    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, |l| l.nin())
    }

    /// Number of outputs the network produces.
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, |l| l.nout())
    }
}

impl<T: Scalar> Module<T> for Mlp<T> {
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrodiffError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
