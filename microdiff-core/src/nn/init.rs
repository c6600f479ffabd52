use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::ops::traits::Scalar;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// How to draw the initial value of a parameter leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Always the same value.
    Constant(f64),
}

impl Default for Init {
    /// `Uniform(-1, 1)`, the weight initialization of [`Neuron`](crate::nn::Neuron).
    fn default() -> Self {
        Init::Uniform { low: -1.0, high: 1.0 }
    }
}

impl Init {
    /// Checks that the distribution parameters describe a valid distribution.
    ///
    /// # Errors
    /// `MicrodiffError::InvalidConfig` for non-finite parameters, `low >= high`, or a
    /// negative standard deviation.
    pub fn validate(&self) -> Result<(), MicrodiffError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(high - low).is_finite() || low >= high {
                    return Err(MicrodiffError::InvalidConfig(format!(
                        "uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(MicrodiffError::InvalidConfig(format!(
                        "normal init requires a finite mean and std >= 0, got mean {} std {}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(MicrodiffError::InvalidConfig(format!(
                        "constant init requires a finite value, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `count` values.
    pub fn sample<T, R>(&self, count: usize, rng: &mut R) -> Result<Vec<T>, MicrodiffError>
    where
        T: Scalar,
        R: Rng + ?Sized,
    {
        self.validate()?;
        let raw: Vec<f64> = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..count).map(|_| dist.sample(rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std)
                    .map_err(|e| MicrodiffError::InvalidConfig(format!("normal init: {}", e)))?;
                (0..count).map(|_| dist.sample(rng)).collect()
            }
            Init::Constant(value) => vec![value; count],
        };
        raw.into_iter()
            .map(|x| {
                num_traits::cast::<f64, T>(x).ok_or_else(|| {
                    MicrodiffError::InvalidConfig(format!("init value {} does not fit the scalar type", x))
                })
            })
            .collect()
    }

    /// Creates `count` fresh leaves in `graph` holding sampled values.
    pub fn leaves<T, R>(&self, graph: &mut Graph<T>, count: usize, rng: &mut R) -> Result<Vec<NodeId>, MicrodiffError>
    where
        T: Scalar,
        R: Rng + ?Sized,
    {
        let values: Vec<T> = self.sample(count, rng)?;
        Ok(values.into_iter().map(|v| graph.leaf(v)).collect())
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
