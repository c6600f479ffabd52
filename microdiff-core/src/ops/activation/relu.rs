use crate::autograd::{Graph, NodeId, Op};
use crate::ops::traits::Scalar;

/// Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the incoming gradient passes through when `a > 0` and is dropped
/// otherwise, including at exactly `a == 0`.
pub fn relu_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let x = graph.value(a);
    let value = if x > T::zero() { x } else { T::zero() };
    graph.push(value, Op::Relu(a))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
