//! # microdiff-core
//!
//! Scalar reverse-mode automatic differentiation.
//!
//! Expressions are built as nodes of a [`Graph`] arena, either through the
//! `*_op` functions in [`ops`] or through the operator sugar of [`Value`].
//! [`Graph::backward`] then fills every ancestor's gradient with the partial
//! derivative of the chosen output.
//!
//! On top of the engine sit a small neural network toolkit ([`nn`]), an SGD
//! optimizer ([`optim`]) and a training driver ([`train`]).

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;
pub mod value;

pub use autograd::{Graph, NodeId, Op};
pub use error::MicrodiffError;
pub use ops::traits::Scalar;
pub use value::{shared_graph, SharedGraph, Value};

// Re-export traits required by public functions/structs
pub use num_traits;
