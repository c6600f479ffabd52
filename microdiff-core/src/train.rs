//! Full-batch training loop for scalar regression/classification models.
//!
//! Every epoch rebuilds the expression graph on top of the parameter leaves and
//! truncates it afterwards, so the arena only ever holds the parameters plus one
//! epoch's expressions.

use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::nn::losses::sum_squared_error;
use crate::nn::module::Module;
use crate::ops::traits::Scalar;
use crate::optim::{Optimizer, Sgd};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Hyperparameters of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of full passes over the data.
    pub epochs: usize,
    /// SGD step size.
    pub learning_rate: f64,
    /// SGD momentum (0 disables it).
    pub momentum: f64,
    /// L2 penalty (0 disables it).
    pub weight_decay: f64,
    /// Log the loss every this many epochs (0 = never).
    pub log_every: usize,
    /// Seed for parameter initialization.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.01,
            momentum: 0.0,
            weight_decay: 0.0,
            log_every: 10,
            seed: 42,
        }
    }
}

impl TrainConfig {
    /// Returns `Ok(())` if the configuration can be used for training.
    pub fn validate(&self) -> Result<(), MicrodiffError> {
        self.validate_epochs()?;
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(MicrodiffError::InvalidConfig(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if !self.momentum.is_finite() || !(0.0..1.0).contains(&self.momentum) {
            return Err(MicrodiffError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if !self.weight_decay.is_finite() || self.weight_decay < 0.0 {
            return Err(MicrodiffError::InvalidConfig(format!(
                "weight_decay must be finite and non-negative, got {}",
                self.weight_decay
            )));
        }
        Ok(())
    }

    /// Checks the fields [`fit`] itself reads. The optimizer hyperparameters are
    /// checked when the optimizer is built.
    fn validate_epochs(&self) -> Result<(), MicrodiffError> {
        if self.epochs == 0 {
            return Err(MicrodiffError::InvalidConfig(
                "epochs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// A seeded generator for building the model.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// An [`Sgd`] optimizer over `params` with this configuration's hyperparameters.
    pub fn sgd<T: Scalar>(&self, params: impl IntoIterator<Item = NodeId>) -> Result<Sgd<T>, MicrodiffError> {
        self.validate()?;
        Sgd::new(params, cast(self.learning_rate)?)?
            .with_momentum(cast(self.momentum)?)?
            .with_weight_decay(cast(self.weight_decay)?)
    }
}

/// Trains `model` on `(xs, ys)` with the sum-of-squared-errors loss.
///
/// Each epoch forwards every sample, sums the squared errors, clears the parameter
/// gradients, runs the backward pass and lets `optimizer` update the parameters.
/// The model must have exactly one output.
///
/// All parameters must already exist in `graph`: every node created after the call
/// starts is removed at the end of each epoch.
///
/// Returns the loss of every epoch, measured before that epoch's update.
///
/// # Errors
/// * `EmptyBatch` / `ShapeMismatch` for empty or inconsistent data.
/// * `InvalidConfig` if `config.epochs` is 0. The optimizer settings in `config`
///   are not used here; `optimizer` carries its own.
/// * `NonFiniteLoss` if the loss becomes NaN or infinite; parameters are left as
///   they were before that epoch.
pub fn fit<T, M, O>(
    graph: &mut Graph<T>,
    model: &M,
    optimizer: &mut O,
    xs: &[Vec<T>],
    ys: &[T],
    config: &TrainConfig,
) -> Result<Vec<T>, MicrodiffError>
where
    T: Scalar,
    M: Module<T> + ?Sized,
    O: Optimizer<T> + ?Sized,
{
    config.validate_epochs()?;
    if xs.is_empty() {
        return Err(MicrodiffError::EmptyBatch {
            operation: "fit".to_string(),
        });
    }
    if xs.len() != ys.len() {
        return Err(MicrodiffError::ShapeMismatch {
            expected: xs.len(),
            actual: ys.len(),
            operation: "fit".to_string(),
        });
    }

    let mark = graph.len();
    let mut history = Vec::with_capacity(config.epochs);
    log::info!(
        "Training for {} epochs on {} samples ({} parameters)",
        config.epochs,
        xs.len(),
        model.num_parameters()
    );

    for epoch in 0..config.epochs {
        let result = run_epoch(graph, model, optimizer, xs, ys);
        graph.truncate(mark);
        let loss = result?;

        if !loss.is_finite() {
            log::warn!("Loss diverged at epoch {}: {}", epoch, loss);
            return Err(MicrodiffError::NonFiniteLoss {
                epoch,
                value: loss.to_f64().unwrap_or(f64::NAN),
            });
        }
        optimizer.step(graph)?;

        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch + 1 == config.epochs) {
            log::info!("epoch {:>4}: loss {}", epoch, loss);
        }
        history.push(loss);
    }

    Ok(history)
}

/// Forward, loss and backward for one epoch. Returns the loss value.
fn run_epoch<T, M, O>(
    graph: &mut Graph<T>,
    model: &M,
    optimizer: &mut O,
    xs: &[Vec<T>],
    ys: &[T],
) -> Result<T, MicrodiffError>
where
    T: Scalar,
    M: Module<T> + ?Sized,
    O: Optimizer<T> + ?Sized,
{
    let predictions = xs
        .iter()
        .map(|x| forward_single(graph, model, x))
        .collect::<Result<Vec<_>, _>>()?;
    let loss = sum_squared_error(graph, &predictions, ys)?;

    optimizer.zero_grad(graph);
    graph.backward(loss);
    Ok(graph.value(loss))
}

/// Wraps `x` as input leaves and returns the model's single output node.
fn forward_single<T, M>(graph: &mut Graph<T>, model: &M, x: &[T]) -> Result<NodeId, MicrodiffError>
where
    T: Scalar,
    M: Module<T> + ?Sized,
{
    let inputs: Vec<NodeId> = x.iter().map(|&v| graph.leaf(v)).collect();
    let outputs = model.forward(graph, &inputs)?;
    match outputs.as_slice() {
        [single] => Ok(*single),
        _ => Err(MicrodiffError::ShapeMismatch {
            expected: 1,
            actual: outputs.len(),
            operation: "fit (model output)".to_string(),
        }),
    }
}

/// Evaluates `model` on one sample and returns its output values.
///
/// The nodes created for the evaluation are removed again.
pub fn predict<T, M>(graph: &mut Graph<T>, model: &M, x: &[T]) -> Result<Vec<T>, MicrodiffError>
where
    T: Scalar,
    M: Module<T> + ?Sized,
{
    let mark = graph.len();
    let inputs: Vec<NodeId> = x.iter().map(|&v| graph.leaf(v)).collect();
    let result = model
        .forward(graph, &inputs)
        .map(|outputs| outputs.iter().map(|&id| graph.value(id)).collect());
    graph.truncate(mark);
    result
}

/// Fraction of samples whose single output has the same sign as the ±1 label.
pub fn sign_accuracy<T, M>(graph: &mut Graph<T>, model: &M, xs: &[Vec<T>], ys: &[T]) -> Result<f64, MicrodiffError>
where
    T: Scalar,
    M: Module<T> + ?Sized,
{
    if xs.is_empty() {
        return Err(MicrodiffError::EmptyBatch {
            operation: "sign_accuracy".to_string(),
        });
    }
    if xs.len() != ys.len() {
        return Err(MicrodiffError::ShapeMismatch {
            expected: xs.len(),
            actual: ys.len(),
            operation: "sign_accuracy".to_string(),
        });
    }
    let mut correct = 0usize;
    for (x, &y) in xs.iter().zip(ys) {
        let out = predict(graph, model, x)?;
        let score = match out.as_slice() {
            [single] => *single,
            _ => {
                return Err(MicrodiffError::ShapeMismatch {
                    expected: 1,
                    actual: out.len(),
                    operation: "sign_accuracy (model output)".to_string(),
                })
            }
        };
        if (score > T::zero()) == (y > T::zero()) {
            correct += 1;
        }
    }
    Ok(correct as f64 / xs.len() as f64)
}

fn cast<T: Scalar>(value: f64) -> Result<T, MicrodiffError> {
    num_traits::cast::<f64, T>(value).ok_or_else(|| {
        MicrodiffError::InvalidConfig(format!("{} does not fit the scalar type", value))
    })
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
