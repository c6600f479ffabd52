use crate::autograd::{Graph, NodeId, Op};
use crate::ops::traits::Scalar;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `grad_a += b * g`, `grad_b += a * g`.
pub fn mul_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let value = graph.value(a) * graph.value(b);
    graph.push(value, Op::Mul(a, b))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
