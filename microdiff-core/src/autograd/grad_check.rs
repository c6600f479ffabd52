use crate::autograd::graph::{Graph, NodeId};
use crate::error::MicrodiffError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicrodiffError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using centered finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns the
/// node whose gradient is checked. It is called once for the analytical pass and
/// twice per input for `f(x + epsilon)` and `f(x - epsilon)`.
///
/// An input fails only if the difference exceeds both `abs_tolerance` and
/// `rel_tolerance` relative to the larger of the two gradients.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph<f64>, &[NodeId]) -> Result<NodeId, MicrodiffError>,
{
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical gradients ---
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph.backward(output);
    let analytical_grads: Vec<f64> = leaves.iter().map(|&leaf| graph.grad(leaf)).collect();

    // --- Numerical gradients ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let value_plus = evaluate(&func, inputs, i, epsilon)?;
        let value_minus = evaluate(&func, inputs, i, -epsilon)?;
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let scale = analytical_grad.abs().max(numerical_grad.abs());
        if difference > abs_tolerance && difference > rel_tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

/// Evaluates `func` in a fresh graph with input `index` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph<f64>, &[NodeId]) -> Result<NodeId, MicrodiffError>,
{
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{mul_op, pow_op};

    #[test]
    fn test_check_grad_passes_for_correct_rule() {
        let func = |g: &mut Graph<f64>, x: &[NodeId]| -> Result<NodeId, MicrodiffError> {
            let sq = pow_op(g, x[0], 2.0)?;
            Ok(mul_op(g, sq, x[1]))
        };
        let result = check_grad(func, &[1.5, -0.5], 1e-6, 1e-7, 1e-5);
        assert!(result.is_ok(), "grad check failed: {:?}", result.err());
    }

    #[test]
    fn test_check_grad_reports_mismatch() {
        // Gradient is cut by overwriting the leaf input: the returned node is a new
        // leaf, so its analytical gradient w.r.t. the input is 0 while the value moves.
        let func = |g: &mut Graph<f64>, x: &[NodeId]| -> Result<NodeId, MicrodiffError> {
            let v = g.value(x[0]);
            Ok(g.leaf(v * 3.0))
        };
        match check_grad(func, &[2.0], 1e-6, 1e-7, 1e-5) {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 0.0);
                assert!((numerical_grad - 3.0).abs() < 1e-4);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_forwards_construction_errors() {
        let func = |g: &mut Graph<f64>, x: &[NodeId]| pow_op(g, x[0], f64::NAN);
        let result = check_grad(func, &[1.0], 1e-6, 1e-7, 1e-5);
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(MicrodiffError::InvalidExponent { .. }))
        ));
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let func = |_: &mut Graph<f64>, x: &[NodeId]| -> Result<NodeId, MicrodiffError> { Ok(x[0]) };
        assert_eq!(
            check_grad(func, &[1.0], 0.0, 1e-7, 1e-5),
            Err(GradCheckError::InvalidEpsilon(0.0))
        );
    }
}
