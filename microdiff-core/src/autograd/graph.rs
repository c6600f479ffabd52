use crate::autograd::backward_op::Op;
use crate::error::MicrodiffError;
use crate::ops::traits::Scalar;
use std::fmt;

/// Index of a node inside a [`Graph`].
///
/// Ids are only meaningful for the graph that issued them. Using an id with another
/// graph, or after [`Graph::truncate`] removed its node, panics like out-of-range
/// slice indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex of the expression graph.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    pub(crate) label: Option<String>,
}

/// Arena holding every node of a scalar expression graph.
///
/// Nodes are appended by leaf construction and by the `*_op` functions in
/// [`crate::ops`]. An operation can only reference nodes that already exist, so every
/// operand has a smaller index than its consumer and the graph is acyclic by
/// construction.
///
/// Gradients live next to values: [`Graph::backward`] accumulates into them and
/// [`Graph::zero_grad`] resets them.
#[derive(Debug, Clone, Default)]
pub struct Graph<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps a raw number as a leaf node: gradient 0, no operands, no-op backward rule.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push(value, Op::Leaf)
    }

    /// Creates a leaf carrying a diagnostic label.
    pub fn labeled_leaf(&mut self, value: T, label: impl Into<String>) -> NodeId {
        let id = self.leaf(value);
        self.set_label(id, label);
        id
    }

    /// Appends a node produced by `op`. Operands must already be in the arena.
    pub(crate) fn push(&mut self, value: T, op: Op<T>) -> NodeId {
        debug_assert!(
            op.operands().all(|operand| operand.0 < self.nodes.len()),
            "operand of {:?} is not in the graph",
            op
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            grad: T::zero(),
            op,
            label: None,
        });
        id
    }

    /// Forward value of a node.
    pub fn value(&self, id: NodeId) -> T {
        self.nodes[id.0].value
    }

    /// Accumulated gradient of a node.
    pub fn grad(&self, id: NodeId) -> T {
        self.nodes[id.0].grad
    }

    /// The operation that produced a node.
    pub fn op(&self, id: NodeId) -> Op<T> {
        self.nodes[id.0].op
    }

    /// Operands of a node, in the order they were passed to the operation.
    pub fn operands(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        self.nodes[id.0].op.operands()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].op, Op::Leaf)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].label.as_deref()
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        self.nodes[id.0].label = Some(label.into());
    }

    /// Overwrites the value of a leaf (a parameter update).
    ///
    /// Nodes derived from the leaf keep their old values; callers rebuild the
    /// expression after updating, typically after [`Graph::truncate`].
    ///
    /// # Errors
    /// Returns `MicrodiffError::NotALeaf` if `id` was produced by an operation.
    pub fn set_leaf_value(&mut self, id: NodeId, value: T) -> Result<(), MicrodiffError> {
        let node = &mut self.nodes[id.0];
        if !matches!(node.op, Op::Leaf) {
            return Err(MicrodiffError::NotALeaf { node: id.0 });
        }
        node.value = value;
        Ok(())
    }

    /// Drops every node with index `>= len`.
    ///
    /// Operands always precede their consumers, so the remaining prefix is still a
    /// complete graph. Ids of removed nodes become invalid.
    pub fn truncate(&mut self, len: usize) {
        if len < self.nodes.len() {
            log::trace!("Truncating graph from {} to {} nodes", self.nodes.len(), len);
        }
        self.nodes.truncate(len);
    }

    /// Ids of every node currently in the arena, in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}

/// Computes a topological order of all ancestors of `root` (including `root`).
///
/// Depth-first post-order: a node is appended only after all of its operands have
/// been appended, and a visited set ensures shared operands appear exactly once.
/// Iterating the result back to front visits every consumer before its operands.
///
/// The traversal uses an explicit stack, so deep chains (long running sums) do not
/// grow the call stack.
pub fn topological_sort<T: Scalar>(graph: &Graph<T>, root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; graph.len()];
    let mut sorted_list = Vec::new();
    // (node, operands already expanded)
    let mut stack = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if visited[node.0] {
            continue;
        }
        visited[node.0] = true;
        stack.push((node, true));
        // Pushed in reverse so the first operand is explored first.
        let operands: Vec<NodeId> = graph.operands(node).collect();
        for operand in operands.into_iter().rev() {
            if !visited[operand.0] {
                stack.push((operand, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
