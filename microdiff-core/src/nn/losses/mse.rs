// src/nn/losses/mse.rs

use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::ops::arithmetic::{add_op, div_scalar_op, pow_op, sub_scalar_op};
use crate::ops::traits::Scalar;

/// Sum of squared errors: `Σ (prediction_i - target_i)^2`.
///
/// Targets are plain numbers; each one is wrapped as a leaf, so gradients only
/// flow into the predictions.
///
/// # Errors
/// * `MicrodiffError::EmptyBatch` if `predictions` is empty.
/// * `MicrodiffError::ShapeMismatch` if the two slices differ in length.
pub fn sum_squared_error<T: Scalar>(
    graph: &mut Graph<T>,
    predictions: &[NodeId],
    targets: &[T],
) -> Result<NodeId, MicrodiffError> {
    check_batch(predictions, targets, "sum_squared_error")?;

    let two = T::one() + T::one();
    let mut total: Option<NodeId> = None;
    for (&prediction, &target) in predictions.iter().zip(targets) {
        let diff = sub_scalar_op(graph, prediction, target);
        let squared = pow_op(graph, diff, two)?;
        total = Some(match total {
            Some(acc) => add_op(graph, acc, squared),
            None => squared,
        });
    }
    // Non-empty batch checked above.
    total.ok_or_else(|| MicrodiffError::EmptyBatch {
        operation: "sum_squared_error".to_string(),
    })
}

/// Mean squared error: [`sum_squared_error`] divided by the batch size.
pub fn mean_squared_error<T: Scalar>(
    graph: &mut Graph<T>,
    predictions: &[NodeId],
    targets: &[T],
) -> Result<NodeId, MicrodiffError> {
    check_batch(predictions, targets, "mean_squared_error")?;
    let sse = sum_squared_error(graph, predictions, targets)?;
    let n = num_traits::cast::<usize, T>(predictions.len()).ok_or_else(|| {
        MicrodiffError::InvalidConfig(format!(
            "batch size {} does not fit the scalar type",
            predictions.len()
        ))
    })?;
    Ok(div_scalar_op(graph, sse, n))
}

fn check_batch<T>(predictions: &[NodeId], targets: &[T], operation: &str) -> Result<(), MicrodiffError> {
    if predictions.is_empty() {
        return Err(MicrodiffError::EmptyBatch {
            operation: operation.to_string(),
        });
    }
    if predictions.len() != targets.len() {
        return Err(MicrodiffError::ShapeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
