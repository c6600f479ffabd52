use crate::autograd::{Graph, NodeId, Op};
use crate::ops::traits::Scalar;

/// Adds two nodes: `a + b`.
///
/// Backward: the incoming gradient flows unchanged to both operands.
pub fn add_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let value = graph.value(a) + graph.value(b);
    graph.push(value, Op::Add(a, b))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
