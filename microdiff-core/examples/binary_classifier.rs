//! # Binary classifier on four samples
//!
//! Trains a 3-4-4-1 MLP with ReLU hidden layers on four hand-written samples with
//! ±1 labels, using plain gradient descent on the sum of squared errors.
//!
//! Run with `RUST_LOG=info cargo run --example binary_classifier` to see the loss.

use microdiff_core::model::Mlp;
use microdiff_core::nn::{Activation, Module};
use microdiff_core::train::{fit, predict, sign_accuracy, TrainConfig};
use microdiff_core::{Graph, MicrodiffError};

fn main() -> Result<(), MicrodiffError> {
    let _ = env_logger::builder().is_test(false).try_init();

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];

    let config = TrainConfig {
        epochs: 100,
        learning_rate: 0.01,
        log_every: 10,
        ..TrainConfig::default()
    };
    config.validate()?;

    let mut graph = Graph::<f64>::new();
    let mut rng = config.rng();
    let model = Mlp::new(&mut graph, 3, &[4, 4, 1], Activation::Relu, &mut rng)?;
    println!("MLP with {} parameters", model.num_parameters());

    let mut optimizer = config.sgd(model.parameters())?;
    let history = fit(&mut graph, &model, &mut optimizer, &xs, &ys, &config)?;

    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!("loss: {:.6} -> {:.6}", first, last);
    }
    for (x, y) in xs.iter().zip(&ys) {
        let out = predict(&mut graph, &model, x)?;
        println!("{:?} -> {:+.4} (target {:+})", x, out[0], y);
    }
    println!(
        "sign accuracy: {:.0}%",
        100.0 * sign_accuracy(&mut graph, &model, &xs, &ys)?
    );
    Ok(())
}
