use crate::autograd::{Graph, NodeId};
use crate::ops::traits::Scalar;

/// Checks that the gradients of `ids` are within `tolerance` of `expected`.
/// Panics with the offending index otherwise.
pub fn check_grads_near<T: Scalar>(graph: &Graph<T>, ids: &[NodeId], expected: &[T], tolerance: T) {
    assert_eq!(ids.len(), expected.len(), "Gradient count mismatch");

    for (i, (&id, &e)) in ids.iter().zip(expected.iter()).enumerate() {
        let actual = graph.grad(id);
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} (node {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
}

/// Same as [`check_grads_near`] for forward values.
pub fn check_values_near<T: Scalar>(graph: &Graph<T>, ids: &[NodeId], expected: &[T], tolerance: T) {
    assert_eq!(ids.len(), expected.len(), "Value count mismatch");

    for (i, (&id, &e)) in ids.iter().zip(expected.iter()).enumerate() {
        let actual = graph.value(id);
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Value mismatch at index {} (node {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grads_near_accepts_close_values() {
        let mut graph = Graph::<f64>::new();
        let a = graph.leaf(1.0);
        graph.backward(a);
        check_grads_near(&graph, &[a], &[1.0 + 1e-9], 1e-6);
        check_values_near(&graph, &[a], &[1.0], 0.0);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch at index 0")]
    fn test_check_grads_near_panics_on_mismatch() {
        let mut graph = Graph::<f64>::new();
        let a = graph.leaf(1.0);
        check_grads_near(&graph, &[a], &[0.5], 1e-6);
    }

    #[test]
    #[should_panic(expected = "Value mismatch")]
    fn test_check_values_near_panics_on_nan() {
        let mut graph = Graph::<f64>::new();
        let a = graph.leaf(f64::NAN);
        check_values_near(&graph, &[a], &[0.0], 1.0);
    }
}
