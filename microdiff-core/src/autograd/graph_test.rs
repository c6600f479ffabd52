use super::*;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::ops::activation::tanh_op;

fn position(order: &[NodeId], id: NodeId) -> usize {
    order
        .iter()
        .position(|&n| n == id)
        .unwrap_or_else(|| panic!("{} missing from order {:?}", id, order))
}

#[test]
fn test_leaf_construction() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.5);
    assert_eq!(graph.value(a), 2.5);
    assert_eq!(graph.grad(a), 0.0);
    assert!(graph.is_leaf(a));
    assert_eq!(graph.operands(a).count(), 0);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_labels_are_diagnostic_only() {
    let mut graph = Graph::<f64>::new();
    let a = graph.labeled_leaf(1.0, "a");
    let b = graph.leaf(2.0);
    assert_eq!(graph.label(a), Some("a"));
    assert_eq!(graph.label(b), None);
    graph.set_label(b, "b");
    assert_eq!(graph.label(b), Some("b"));
    assert_eq!(graph.op(b).name(), "");
}

#[test]
fn test_topological_sort_single_leaf() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1.0);
    assert_eq!(topological_sort(&graph, a), vec![a]);
}

#[test]
fn test_topological_sort_diamond_visits_shared_node_once() {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(0.5);
    let left = tanh_op(&mut graph, x);
    let right = mul_op(&mut graph, x, x);
    let out = add_op(&mut graph, left, right);

    let order = topological_sort(&graph, out);
    assert_eq!(order.len(), 4);
    assert_eq!(order.iter().filter(|&&n| n == x).count(), 1);
    assert!(position(&order, x) < position(&order, left));
    assert!(position(&order, x) < position(&order, right));
    assert!(position(&order, left) < position(&order, out));
    assert!(position(&order, right) < position(&order, out));
    assert_eq!(*order.last().unwrap(), out);
}

#[test]
fn test_topological_sort_ignores_unrelated_nodes() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let unrelated = graph.leaf(3.0);
    let _other = mul_op(&mut graph, b, unrelated);
    let out = add_op(&mut graph, a, b);

    let order = topological_sort(&graph, out);
    assert_eq!(order.len(), 3);
    assert!(!order.contains(&unrelated));
}

#[test]
fn test_topological_sort_deep_chain() {
    let mut graph = Graph::<f64>::new();
    let one = graph.leaf(1.0);
    let mut acc = graph.leaf(0.0);
    for _ in 0..100_000 {
        acc = add_op(&mut graph, acc, one);
    }
    let order = topological_sort(&graph, acc);
    assert_eq!(order.len(), 100_002);
    assert_eq!(*order.last().unwrap(), acc);
}

#[test]
fn test_set_leaf_value() -> Result<(), MicrodiffError> {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let c = add_op(&mut graph, a, b);

    graph.set_leaf_value(a, 5.0)?;
    assert_eq!(graph.value(a), 5.0);
    // Derived values are never recomputed in place.
    assert_eq!(graph.value(c), 3.0);

    match graph.set_leaf_value(c, 0.0) {
        Err(MicrodiffError::NotALeaf { node }) => assert_eq!(node, c.index()),
        other => panic!("Expected NotALeaf, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_truncate_keeps_prefix() {
    let mut graph = Graph::<f64>::new();
    let w = graph.leaf(3.0);
    let mark = graph.len();
    let x = graph.leaf(2.0);
    let _y = mul_op(&mut graph, w, x);
    assert_eq!(graph.len(), 3);

    graph.truncate(mark);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.value(w), 3.0);

    // Truncating past the end is a no-op.
    graph.truncate(10);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_node_ids_in_creation_order() {
    let mut graph = Graph::<f32>::with_capacity(4);
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let c = add_op(&mut graph, a, b);
    let ids: Vec<NodeId> = graph.node_ids().collect();
    assert_eq!(ids, vec![a, b, c]);
    assert_eq!(format!("{}", c), "#2");
}
