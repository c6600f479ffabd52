// src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! Optimizers own the ids of the parameter leaves they update and write new values
//! through [`Graph::set_leaf_value`](crate::Graph::set_leaf_value).

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
