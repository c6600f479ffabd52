// src/nn/losses/mod.rs

pub mod mse;

pub use mse::{mean_squared_error, sum_squared_error};
