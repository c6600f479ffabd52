use crate::autograd::{Graph, NodeId};
use crate::ops::arithmetic::{mul::mul_op, pow::pow_unchecked};
use crate::ops::traits::Scalar;

/// Divides two nodes, expressed as `a * b^(-1)`.
///
/// Division by a zero-valued node is not an error: the value and gradients follow
/// IEEE semantics (infinities and NaN propagate).
pub fn div_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let recip = pow_unchecked(graph, b, -T::one());
    mul_op(graph, a, recip)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
