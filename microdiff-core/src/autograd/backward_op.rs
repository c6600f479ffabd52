use crate::autograd::graph::NodeId;
use crate::ops::traits::Scalar;

/// The operation that produced a node, together with references to its operands.
///
/// Each variant carries exactly what its local derivative rule needs: the operand
/// ids and, for `Pow`, the constant exponent. The differentiator dispatches on the
/// variant in [`Op::local_grads`] instead of storing a closure per node.
///
/// `neg`, `sub` and `div` have no variant of their own: they are built from `Mul`,
/// `Add` and `Pow` (see [`crate::ops::arithmetic`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// Input or trainable parameter. No operands, no-op backward rule.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// `a^k` with a fixed, finite exponent `k`.
    Pow(NodeId, T),
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
}

/// Local gradient contributions of one node: up to two `(operand, d_out/d_operand)` pairs.
pub(crate) type LocalGrads<T> = [Option<(NodeId, T)>; 2];

impl<T: Scalar> Op<T> {
    /// Symbolic label of the operation, used for diagnostics only.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow(..) => "pow",
            Op::Exp(_) => "exp",
            Op::Tanh(_) => "tanh",
            Op::Relu(_) => "relu",
        }
    }

    /// Returns the operands in order: none for a leaf, one for unary ops, two for binary ops.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> {
        let pair = match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => [Some(a), None],
        };
        pair.into_iter().flatten()
    }

    /// Computes the partial derivative of the node's output with respect to each operand.
    ///
    /// # Arguments
    /// * `out_value`: the value of the node this op produced (reused by `exp` and `tanh`).
    /// * `value_of`: reads the forward value of an operand.
    ///
    /// The caller multiplies each partial by the node's accumulated gradient and adds
    /// it to the operand (chain rule). When both operands are the same node, the two
    /// contributions are returned separately so they sum on accumulation.
    pub(crate) fn local_grads(&self, out_value: T, value_of: impl Fn(NodeId) -> T) -> LocalGrads<T> {
        match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) => [Some((a, T::one())), Some((b, T::one()))],
            Op::Mul(a, b) => [Some((a, value_of(b))), Some((b, value_of(a)))],
            Op::Pow(a, k) => {
                let base = value_of(a);
                [Some((a, k * base.powf(k - T::one()))), None]
            }
            Op::Exp(a) => [Some((a, out_value)), None],
            Op::Tanh(a) => [Some((a, T::one() - out_value * out_value)), None],
            // The kink at 0 routes no gradient.
            Op::Relu(a) => {
                let slope = if value_of(a) > T::zero() { T::one() } else { T::zero() };
                [Some((a, slope)), None]
            }
        }
    }
}
