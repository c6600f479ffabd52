use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::ops::traits::Scalar;
use rand::Rng;
use std::marker::PhantomData;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity: the weighted sum is the output.
    Linear,
    Tanh,
    #[default]
    Relu,
}

impl Activation {
    /// Appends the activation of `x` to `graph`. `Linear` appends nothing.
    pub fn apply<T: Scalar>(self, graph: &mut Graph<T>, x: NodeId) -> NodeId {
        match self {
            Activation::Linear => x,
            Activation::Tanh => tanh_op(graph, x),
            Activation::Relu => relu_op(graph, x),
        }
    }
}

/// A single neuron: `act(b + w_0*x_0 + ... + w_{n-1}*x_{n-1})`.
///
/// Weights are drawn from `Uniform(-1, 1)` by default; the bias starts at 0.
#[derive(Debug, Clone)]
pub struct Neuron<T> {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
    _marker: PhantomData<T>,
}

impl<T: Scalar> Neuron<T> {
    /// Creates a neuron with `nin` inputs, its parameters as fresh leaves of `graph`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MicrodiffError> {
        Self::with_init(graph, nin, activation, Init::default(), rng)
    }

    /// Like [`Neuron::new`] with a custom weight initialization.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        activation: Activation,
        weight_init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrodiffError> {
        let weights = weight_init.leaves(graph, nin, rng)?;
        let bias = graph.leaf(T::zero());
        Ok(Neuron {
            weights,
            bias,
            activation,
            _marker: PhantomData,
        })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Computes the neuron's single output node.
    pub fn activate(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<NodeId, MicrodiffError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrodiffError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        // Sum starts from the bias.
        let mut acc = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = mul_op(graph, w, x);
            acc = add_op(graph, acc, wx);
        }
        Ok(self.activation.apply(graph, acc))
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrodiffError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
