use crate::autograd::{Graph, NodeId};
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::traits::Scalar;

/// Negates a node, expressed as `a * (-1)`.
///
/// Creates a constant leaf holding `-1` and reuses the multiplication rule.
pub fn neg_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let minus_one = graph.leaf(-T::one());
    mul_op(graph, a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
