// src/nn/mod.rs
//! Neural network building blocks on top of the scalar engine.
//!
//! Parameters are plain leaves of a [`Graph`](crate::Graph); modules only keep
//! their ids. Models live in [`crate::model`].

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

// Re-export common items
pub use init::Init;
pub use layers::{Activation, Layer, Neuron};
pub use losses::{mean_squared_error, sum_squared_error};
pub use module::Module;
