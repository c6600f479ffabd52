//! # Operations Module (`ops`)
//!
//! Every operation is a free function named `xxx_op` that reads its operands'
//! values from a [`Graph`](crate::Graph), computes the forward value and appends
//! a new node tagged with the [`Op`](crate::autograd::Op) that knows its derivative.
//!
//! - [`arithmetic`]: add, mul, pow (primitives); neg, sub, div (compositions);
//!   scalar-promoting variants.
//! - [`math_elem`]: element functions (exp).
//! - [`activation`]: tanh, relu.
//! - [`traits`]: the [`Scalar`](traits::Scalar) bound for node values.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, pow_op,
    radd_scalar_op, rdiv_scalar_op, rmul_scalar_op, rsub_scalar_op, sub_op, sub_scalar_op,
};
pub use math_elem::exp_op;
