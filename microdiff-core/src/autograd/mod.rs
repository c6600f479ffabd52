//! # Autograd
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! - [`graph`]: the node arena ([`Graph`]), node ids and the topological sort.
//! - [`backward_op`]: the [`Op`] tag stored on every node and its local derivative rules.
//! - `backward`: [`Graph::backward`] and the gradient reset helpers.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
mod backward;

pub use backward_op::Op;
pub use graph::{topological_sort, Graph, NodeId};
