use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::MicrodiffError;

#[test]
fn test_mul_forward_backward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = mul_op(&mut graph, a, b);
    assert_eq!(graph.value(c), 6.0);
    graph.backward(c);
    assert_eq!(graph.grad(a), 3.0);
    assert_eq!(graph.grad(b), 2.0);
}

#[test]
fn test_mul_square_accumulates() {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(-1.25);
    let y = mul_op(&mut graph, x, x);
    graph.backward(y);
    assert_eq!(graph.grad(x), 2.0 * -1.25);
}

#[test]
fn test_mul_by_zero_operand() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(0.0);
    let b = graph.leaf(5.0);
    let c = mul_op(&mut graph, a, b);
    graph.backward(c);
    assert_eq!(graph.grad(a), 5.0);
    assert_eq!(graph.grad(b), 0.0);
}

#[test]
fn test_mul_grad_check() {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| -> Result<NodeId, MicrodiffError> {
        let ab = mul_op(g, x[0], x[1]);
        Ok(mul_op(g, ab, x[0]))
    };
    for inputs in [[0.3, -2.0], [-1.5, 0.0], [4.0, 0.25]] {
        let result = check_grad(func, &inputs, 1e-6, 1e-7, 1e-5);
        assert!(result.is_ok(), "mul grad check failed at {:?}: {:?}", inputs, result.err());
    }
}
