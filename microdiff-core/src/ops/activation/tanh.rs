use crate::autograd::{Graph, NodeId, Op};
use crate::ops::traits::Scalar;

/// Hyperbolic tangent: `t = (e^(2a) - 1) / (e^(2a) + 1)`.
///
/// Evaluated with the platform `tanh`, which saturates to ±1 instead of producing
/// `inf / inf` for large inputs.
/// Backward: `grad_a += (1 - t^2) * g`, using the stored output `t`.
pub fn tanh_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = graph.value(a).tanh();
    graph.push(value, Op::Tanh(a))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
