use crate::autograd::{Graph, NodeId, Op};
use crate::ops::traits::Scalar;

/// Exponential: `e^a`.
///
/// Backward: `grad_a += e^a * g`, reusing the stored output.
pub fn exp_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = graph.value(a).exp();
    graph.push(value, Op::Exp(a))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
