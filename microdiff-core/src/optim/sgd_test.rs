use super::*;
use crate::ops::arithmetic::{add_op, mul_scalar_op};
use approx::assert_relative_eq;

/// Creates one leaf per value and runs a backward pass through `Σ g_i * p_i`, so
/// that parameter `i` ends up with gradient `grads[i]`.
fn params_with_grads(graph: &mut Graph<f64>, values: &[f64], grads: &[f64]) -> Vec<NodeId> {
    let params: Vec<NodeId> = values.iter().map(|&v| graph.leaf(v)).collect();
    let mut total = mul_scalar_op(graph, params[0], grads[0]);
    for (&p, &g) in params.iter().zip(grads).skip(1) {
        let term = mul_scalar_op(graph, p, g);
        total = add_op(graph, total, term);
    }
    graph.backward(total);
    params
}

#[test]
fn test_sgd_basic_step() -> Result<(), MicrodiffError> {
    let mut graph = Graph::new();
    let values = [1.0, 2.0, 3.0, 4.0];
    let grads = [0.1, 0.2, 0.3, 0.4];
    let params = params_with_grads(&mut graph, &values, &grads);

    let mut optimizer = Sgd::new(params.clone(), 0.1)?;
    optimizer.step(&mut graph)?;

    for (i, &p) in params.iter().enumerate() {
        assert_relative_eq!(graph.value(p), values[i] - 0.1 * grads[i], epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), MicrodiffError> {
    let mut graph = Graph::new();
    let params = params_with_grads(&mut graph, &[2.0], &[0.5]);
    let mut optimizer = Sgd::new(params.clone(), 0.1)?.with_weight_decay(0.01)?;
    optimizer.step(&mut graph)?;
    // 2 - 0.1 * (0.5 + 0.01 * 2)
    assert_relative_eq!(graph.value(params[0]), 1.948, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum_accumulates_velocity() -> Result<(), MicrodiffError> {
    let mut graph = Graph::new();
    let params = params_with_grads(&mut graph, &[1.0], &[1.0]);
    let mut optimizer = Sgd::new(params.clone(), 0.1)?.with_momentum(0.9)?;

    // The gradient stays 1 because nothing clears it between steps.
    optimizer.step(&mut graph)?;
    assert_relative_eq!(graph.value(params[0]), 0.9, epsilon = 1e-12);
    optimizer.step(&mut graph)?;
    // v = 0.9 * 1 + 1 = 1.9
    assert_relative_eq!(graph.value(params[0]), 0.9 - 0.19, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), MicrodiffError> {
    let mut graph = Graph::new();
    let params = params_with_grads(&mut graph, &[1.0, 2.0], &[3.0, 4.0]);
    let mut optimizer = Sgd::new(params.clone(), 0.5)?;
    optimizer.zero_grad(&mut graph);
    for &p in &params {
        assert_eq!(graph.grad(p), 0.0);
    }
    // A step with zero gradients changes nothing.
    optimizer.step(&mut graph)?;
    assert_eq!(graph.value(params[0]), 1.0);
    assert_eq!(graph.value(params[1]), 2.0);
    Ok(())
}

#[test]
fn test_sgd_learning_rate_accessors() -> Result<(), MicrodiffError> {
    let mut optimizer = Sgd::<f64>::new(Vec::new(), 0.01)?;
    assert_eq!(optimizer.learning_rate(), 0.01);
    optimizer.set_learning_rate(0.5)?;
    assert_eq!(optimizer.learning_rate(), 0.5);
    assert!(optimizer.set_learning_rate(-1.0).is_err());
    assert_eq!(optimizer.learning_rate(), 0.5);
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    assert!(matches!(Sgd::<f64>::new(Vec::new(), 0.0), Err(MicrodiffError::InvalidConfig(_))));
    assert!(matches!(Sgd::<f64>::new(Vec::new(), f64::NAN), Err(MicrodiffError::InvalidConfig(_))));
    let sgd = Sgd::<f64>::new(Vec::new(), 0.1).unwrap();
    assert!(sgd.clone().with_momentum(1.0).is_err());
    assert!(sgd.clone().with_momentum(-0.1).is_err());
    assert!(sgd.with_weight_decay(-0.1).is_err());
}

#[test]
fn test_sgd_refuses_non_leaf_parameter() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1.0);
    let derived = mul_scalar_op(&mut graph, a, 2.0);
    let mut optimizer = Sgd::new(vec![derived], 0.1).unwrap();
    assert!(matches!(
        optimizer.step(&mut graph),
        Err(MicrodiffError::NotALeaf { .. })
    ));
}

#[test]
fn test_sgd_non_leaf_leaves_every_parameter_untouched() -> Result<(), MicrodiffError> {
    let mut graph = Graph::new();
    let params = params_with_grads(&mut graph, &[1.0, 2.0], &[1.0, 1.0]);
    let derived = mul_scalar_op(&mut graph, params[0], 3.0);
    let mut optimizer = Sgd::new(vec![params[0], params[1], derived], 0.1)?.with_momentum(0.9)?;

    assert!(matches!(
        optimizer.step(&mut graph),
        Err(MicrodiffError::NotALeaf { node }) if node == derived.index()
    ));
    assert_eq!(graph.value(params[0]), 1.0);
    assert_eq!(graph.value(params[1]), 2.0);
    assert!(optimizer.velocity.iter().all(|&v| v == 0.0));
    Ok(())
}
