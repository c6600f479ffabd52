use thiserror::Error;

/// Custom error type for the microdiff engine and its collaborators.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MicrodiffError {
    /// `pow_op` was given an exponent that is NaN or infinite.
    #[error("Invalid exponent for power operation: {exponent} (must be a finite real number)")]
    InvalidExponent { exponent: f64 },

    /// A value update was attempted on a node produced by an operation.
    #[error("Node {node} is not a leaf; only leaf values can be updated")]
    NotALeaf { node: usize },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Operation '{operation}' received an empty batch")]
    EmptyBatch { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The training loss became NaN or infinite.
    #[error("Loss is not finite at epoch {epoch}: {value}")]
    NonFiniteLoss { epoch: usize, value: f64 },
}
