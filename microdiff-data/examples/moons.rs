//! # Mini-batch training on the two moons dataset
//!
//! Builds a 2-16-16-1 tanh MLP and trains it with SGD + momentum on mini-batches
//! drawn by a seeded `RandomSampler`. Each step rebuilds the batch expression on
//! top of the parameter leaves and truncates the graph afterwards.
//!
//! `RUST_LOG=debug cargo run --example moons` also shows the engine's logs.

use microdiff_core::model::Mlp;
use microdiff_core::nn::{mean_squared_error, Activation, Module};
use microdiff_core::optim::Optimizer;
use microdiff_core::train::{sign_accuracy, TrainConfig};
use microdiff_core::{Graph, MicrodiffError, NodeId};
use microdiff_data::{make_moons, split_features_labels, DataLoader, RandomSampler};

fn main() -> Result<(), MicrodiffError> {
    let _ = env_logger::builder().is_test(false).try_init();

    let dataset = make_moons(100, 0.1, 7)?;
    let (xs, ys) = split_features_labels(dataset.as_slice());

    let config = TrainConfig {
        epochs: 60,
        learning_rate: 0.05,
        momentum: 0.9,
        weight_decay: 1e-4,
        ..TrainConfig::default()
    };
    let mut graph = Graph::<f64>::new();
    let mut rng = config.rng();
    let model = Mlp::new(&mut graph, 2, &[16, 16, 1], Activation::Tanh, &mut rng)?;
    let mut optimizer = config.sgd(model.parameters())?;
    let mark = graph.len();

    let sampler = RandomSampler::new(false, None).with_seed(config.seed);
    let mut loader = DataLoader::new(dataset, 20, sampler, false)?;

    for epoch in 0..config.epochs {
        loader.reset();
        let mut epoch_loss = 0.0;
        for batch in loader.by_ref() {
            let batch = batch?;
            let mut predictions = Vec::with_capacity(batch.len());
            let mut targets = Vec::with_capacity(batch.len());
            for (x, y) in &batch {
                let inputs: Vec<NodeId> = x.iter().map(|&v| graph.leaf(v)).collect();
                predictions.push(model.forward(&mut graph, &inputs)?[0]);
                targets.push(*y);
            }
            let loss = mean_squared_error(&mut graph, &predictions, &targets)?;
            optimizer.zero_grad(&mut graph);
            graph.backward(loss);
            epoch_loss += graph.value(loss);
            graph.truncate(mark);
            optimizer.step(&mut graph)?;
        }
        if epoch % 10 == 0 || epoch + 1 == config.epochs {
            println!("epoch {:>3}: summed batch loss {:.4}", epoch, epoch_loss);
        }
    }

    let accuracy = sign_accuracy(&mut graph, &model, &xs, &ys)?;
    println!("training accuracy: {:.1}%", 100.0 * accuracy);
    Ok(())
}
