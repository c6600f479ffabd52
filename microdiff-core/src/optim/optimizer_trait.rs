use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::ops::traits::Scalar;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter leaves based on the gradients
/// accumulated in the [`Graph`] by the last backward pass.
pub trait Optimizer<T: Scalar> {
    /// Performs a single optimization step.
    ///
    /// # Errors
    /// `MicrodiffError::NotALeaf` if a managed id does not refer to a leaf.
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), MicrodiffError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Called before the backward pass of each training iteration, since
    /// [`Graph::backward`] accumulates.
    fn zero_grad(&mut self, graph: &mut Graph<T>) {
        graph.zero_grad(self.params().iter().copied());
    }

    /// The parameters managed by the optimizer.
    fn params(&self) -> &[NodeId];

    fn learning_rate(&self) -> T;

    /// # Errors
    /// `MicrodiffError::InvalidConfig` if `lr` is not finite and positive.
    fn set_learning_rate(&mut self, lr: T) -> Result<(), MicrodiffError>;
}
