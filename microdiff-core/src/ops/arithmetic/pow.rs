use crate::autograd::{Graph, NodeId, Op};
use crate::error::MicrodiffError;
use crate::ops::traits::Scalar;

/// Raises a node to a constant power: `a^exponent`.
///
/// The exponent is a plain number, never a node; no gradient flows into it.
/// Backward: `grad_a += exponent * a^(exponent - 1) * g`.
///
/// # Errors
/// Returns `MicrodiffError::InvalidExponent` if `exponent` is NaN or infinite. The
/// check happens here, while the expression is built, not during `backward`.
pub fn pow_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, exponent: T) -> Result<NodeId, MicrodiffError> {
    if !exponent.is_finite() {
        return Err(MicrodiffError::InvalidExponent {
            exponent: exponent.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(pow_unchecked(graph, a, exponent))
}

/// `pow_op` for exponents known to be finite at the call site.
pub(crate) fn pow_unchecked<T: Scalar>(graph: &mut Graph<T>, a: NodeId, exponent: T) -> NodeId {
    let value = graph.value(a).powf(exponent);
    graph.push(value, Op::Pow(a, exponent))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
