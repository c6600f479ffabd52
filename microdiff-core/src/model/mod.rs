// src/model/mod.rs
//! Ready-made models assembled from [`crate::nn`] layers.

pub mod mlp;

pub use mlp::Mlp;
