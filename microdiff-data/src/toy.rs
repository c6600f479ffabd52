//! Small synthetic datasets for binary classification with ±1 labels.

use crate::datasets::VecDataset;
use microdiff_core::MicrodiffError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// One labelled sample: input features and a ±1 target.
pub type Sample = (Vec<f64>, f64);

/// The four hand-written samples of the classic micrograd binary classifier demo.
pub fn tiny_binary() -> VecDataset<Sample> {
    VecDataset::new(vec![
        (vec![2.0, 3.0, -1.0], 1.0),
        (vec![3.0, -1.0, 0.5], -1.0),
        (vec![0.5, 1.0, 1.0], -1.0),
        (vec![1.0, 1.0, -1.0], 1.0),
    ])
}

/// Two interleaving half circles in 2D.
///
/// The upper moon (centered at the origin) is labelled `-1`, the lower moon
/// (shifted to `(1, 0.5)`) is labelled `+1`. Gaussian noise with standard deviation
/// `noise` is added to both coordinates and the samples are shuffled.
///
/// # Errors
/// `MicrodiffError::InvalidConfig` if `noise` is negative or not finite.
pub fn make_moons(n_samples: usize, noise: f64, seed: u64) -> Result<VecDataset<Sample>, MicrodiffError> {
    if !noise.is_finite() || noise < 0.0 {
        return Err(MicrodiffError::InvalidConfig(format!(
            "make_moons noise must be finite and >= 0, got {}",
            noise
        )));
    }
    let jitter = Normal::new(0.0, noise)
        .map_err(|e| MicrodiffError::InvalidConfig(format!("make_moons noise: {}", e)))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;
    let mut samples = Vec::with_capacity(n_samples);

    for theta in linspace_to_pi(n_outer) {
        samples.push((vec![theta.cos(), theta.sin()], -1.0));
    }
    for theta in linspace_to_pi(n_inner) {
        samples.push((vec![1.0 - theta.cos(), 0.5 - theta.sin()], 1.0));
    }
    for (features, _) in samples.iter_mut() {
        for x in features.iter_mut() {
            *x += jitter.sample(&mut rng);
        }
    }
    samples.shuffle(&mut rng);

    log::debug!("Generated {} moon samples (noise {})", samples.len(), noise);
    Ok(VecDataset::new(samples))
}

/// Splits samples into the `(xs, ys)` slices expected by the training driver.
pub fn split_features_labels(samples: &[Sample]) -> (Vec<Vec<f64>>, Vec<f64>) {
    samples.iter().cloned().unzip()
}

/// `count` evenly spaced angles from 0 to π inclusive.
fn linspace_to_pi(count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 { PI / (count - 1) as f64 } else { 0.0 };
    (0..count).map(move |i| i as f64 * step)
}

#[cfg(test)]
#[path = "toy_test.rs"]
mod tests;
