use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;
use crate::ops::traits::Scalar;
use rand::Rng;

/// A fully connected layer: `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer<T> {
    neurons: Vec<Neuron<T>>,
    nin: usize,
}

impl<T: Scalar> Layer<T> {
    /// Creates a layer of `nout` neurons with `nin` inputs each.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MicrodiffError> {
        Self::with_init(graph, nin, nout, activation, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        nout: usize,
        activation: Activation,
        weight_init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrodiffError> {
        let neurons = (0..nout)
            .map(|_| Neuron::with_init(graph, nin, activation, weight_init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }
}

impl<T: Scalar> Module<T> for Layer<T> {
    /// One output node per neuron, in neuron order.
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrodiffError> {
        if inputs.len() != self.nin {
            return Err(MicrodiffError::ShapeMismatch {
                expected: self.nin,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
