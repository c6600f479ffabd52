use crate::autograd::{Graph, NodeId};
use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use crate::ops::traits::Scalar;

/// Subtracts two nodes, expressed as `a + (-b)`.
pub fn sub_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let neg_b = neg_op(graph, b);
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
