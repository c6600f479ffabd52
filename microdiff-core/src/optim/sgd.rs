use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::optim::optimizer_trait::Optimizer;
use crate::ops::traits::Scalar;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Update rule for each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (only when momentum > 0)
/// p = p - lr * v              (or p - lr * d without momentum)
/// ```
///
/// With the default momentum and weight decay of 0 this is the plain
/// `p.data += -lr * p.grad` update.
#[derive(Debug, Clone)]
pub struct Sgd<T> {
    params: Vec<NodeId>,
    lr: T,
    momentum: T,
    weight_decay: T,
    velocity: Vec<T>,
}

impl<T: Scalar> Sgd<T> {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    /// * `params`: The parameter leaves to optimize.
    /// * `lr`: The learning rate, finite and positive.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: T) -> Result<Self, MicrodiffError> {
        check_learning_rate(lr)?;
        let params: Vec<NodeId> = params.into_iter().collect();
        let velocity = vec![T::zero(); params.len()];
        Ok(Sgd {
            params,
            lr,
            momentum: T::zero(),
            weight_decay: T::zero(),
            velocity,
        })
    }

    /// Sets the momentum factor, in `[0, 1)`.
    pub fn with_momentum(mut self, momentum: T) -> Result<Self, MicrodiffError> {
        if !momentum.is_finite() || momentum < T::zero() || momentum >= T::one() {
            return Err(MicrodiffError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// Sets the L2 penalty factor, finite and non-negative.
    pub fn with_weight_decay(mut self, weight_decay: T) -> Result<Self, MicrodiffError> {
        if !weight_decay.is_finite() || weight_decay < T::zero() {
            return Err(MicrodiffError::InvalidConfig(format!(
                "weight decay must be finite and non-negative, got {}",
                weight_decay
            )));
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn momentum(&self) -> T {
        self.momentum
    }

    pub fn weight_decay(&self) -> T {
        self.weight_decay
    }
}

impl<T: Scalar> Optimizer<T> for Sgd<T> {
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), MicrodiffError> {
        log::debug!(
            "SGD step on {} parameters (lr {}, momentum {}, weight decay {})",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );
        if let Some(&param) = self.params.iter().find(|&&id| !graph.is_leaf(id)) {
            return Err(MicrodiffError::NotALeaf { node: param.index() });
        }
        let use_momentum = self.momentum > T::zero();
        for (&param, velocity) in self.params.iter().zip(self.velocity.iter_mut()) {
            let value = graph.value(param);
            let mut d_p = graph.grad(param);
            if self.weight_decay != T::zero() {
                d_p += self.weight_decay * value;
            }
            if use_momentum {
                *velocity = self.momentum * *velocity + d_p;
                d_p = *velocity;
            }
            graph.set_leaf_value(param, value - self.lr * d_p)?;
        }
        Ok(())
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }

    fn learning_rate(&self) -> T {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: T) -> Result<(), MicrodiffError> {
        check_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }
}

fn check_learning_rate<T: Scalar>(lr: T) -> Result<(), MicrodiffError> {
    if !lr.is_finite() || lr <= T::zero() {
        return Err(MicrodiffError::InvalidConfig(format!(
            "learning rate must be finite and positive, got {}",
            lr
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
