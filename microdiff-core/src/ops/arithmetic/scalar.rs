//! Operations mixing a node with a raw number.
//!
//! Each function wraps the number as a leaf first and then calls the node-node
//! operation, so `add_scalar_op(g, a, 2.0)` builds exactly the same graph as
//! `let two = g.leaf(2.0); add_op(g, a, two)`.

use crate::autograd::{Graph, NodeId};
use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};
use crate::ops::traits::Scalar;

/// `a + scalar`
pub fn add_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, scalar: T) -> NodeId {
    let s = graph.leaf(scalar);
    add_op(graph, a, s)
}

/// `scalar + a`
pub fn radd_scalar_op<T: Scalar>(graph: &mut Graph<T>, scalar: T, a: NodeId) -> NodeId {
    let s = graph.leaf(scalar);
    add_op(graph, s, a)
}

/// `a * scalar`
pub fn mul_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, scalar: T) -> NodeId {
    let s = graph.leaf(scalar);
    mul_op(graph, a, s)
}

/// `scalar * a`
pub fn rmul_scalar_op<T: Scalar>(graph: &mut Graph<T>, scalar: T, a: NodeId) -> NodeId {
    let s = graph.leaf(scalar);
    mul_op(graph, s, a)
}

/// `a - scalar`
pub fn sub_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, scalar: T) -> NodeId {
    let s = graph.leaf(scalar);
    sub_op(graph, a, s)
}

/// `scalar - a`
pub fn rsub_scalar_op<T: Scalar>(graph: &mut Graph<T>, scalar: T, a: NodeId) -> NodeId {
    let s = graph.leaf(scalar);
    sub_op(graph, s, a)
}

/// `a / scalar`
pub fn div_scalar_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, scalar: T) -> NodeId {
    let s = graph.leaf(scalar);
    div_op(graph, a, s)
}

/// `scalar / a`
pub fn rdiv_scalar_op<T: Scalar>(graph: &mut Graph<T>, scalar: T, a: NodeId) -> NodeId {
    let s = graph.leaf(scalar);
    div_op(graph, s, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `f(x, leaf(c))` and `f_scalar(x, c)` in two graphs and compares value and grad of x.
    fn assert_same_as_leaf(
        x: f64,
        c: f64,
        with_leaf: fn(&mut Graph<f64>, NodeId, NodeId) -> NodeId,
        with_scalar: fn(&mut Graph<f64>, NodeId, f64) -> NodeId,
    ) {
        let mut g1 = Graph::new();
        let x1 = g1.leaf(x);
        let c1 = g1.leaf(c);
        let out1 = with_leaf(&mut g1, x1, c1);
        g1.backward(out1);

        let mut g2 = Graph::new();
        let x2 = g2.leaf(x);
        let out2 = with_scalar(&mut g2, x2, c);
        g2.backward(out2);

        assert_eq!(g1.value(out1), g2.value(out2));
        assert_eq!(g1.grad(x1), g2.grad(x2));
        assert_eq!(g1.len(), g2.len());
    }

    #[test]
    fn test_scalar_on_the_right_matches_leaf() {
        assert_same_as_leaf(1.5, 2.0, add_op, add_scalar_op);
        assert_same_as_leaf(1.5, -2.0, mul_op, mul_scalar_op);
        assert_same_as_leaf(1.5, 0.25, sub_op, sub_scalar_op);
        assert_same_as_leaf(1.5, 4.0, div_op, div_scalar_op);
    }

    #[test]
    fn test_scalar_on_the_left_matches_leaf() {
        assert_same_as_leaf(1.5, 2.0, |g, x, c| add_op(g, c, x), |g, x, c| radd_scalar_op(g, c, x));
        assert_same_as_leaf(1.5, -2.0, |g, x, c| mul_op(g, c, x), |g, x, c| rmul_scalar_op(g, c, x));
        assert_same_as_leaf(1.5, 0.25, |g, x, c| sub_op(g, c, x), |g, x, c| rsub_scalar_op(g, c, x));
        assert_same_as_leaf(1.5, 4.0, |g, x, c| div_op(g, c, x), |g, x, c| rdiv_scalar_op(g, c, x));
    }

    #[test]
    fn test_rdiv_scalar_grad() {
        let mut graph = Graph::<f64>::new();
        let x = graph.leaf(2.0);
        let y = rdiv_scalar_op(&mut graph, 1.0, x);
        assert_eq!(graph.value(y), 0.5);
        graph.backward(y);
        assert_eq!(graph.grad(x), -0.25);
    }
}
