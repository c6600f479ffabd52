use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::ops::traits::Scalar;
use std::fmt::Debug;

/// The base trait for all neural network modules (neurons, layers, models).
///
/// A module owns the ids of its parameter leaves; the leaves themselves live in the
/// [`Graph`] passed to every call. `forward` appends the module's expression to that
/// graph and returns the output nodes.
pub trait Module<T: Scalar>: Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph holding the parameters; output nodes are appended to it.
    /// * `inputs`: One node per input feature.
    ///
    /// # Errors
    /// `MicrodiffError::ShapeMismatch` if `inputs` does not have the expected length.
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, MicrodiffError>;

    /// Returns the ids of all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<NodeId>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self, graph: &mut Graph<T>) {
        graph.zero_grad(self.parameters());
    }

    /// Total number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
