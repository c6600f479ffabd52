use crate::autograd::backward_op::Op;
use crate::autograd::graph::{topological_sort, Graph, NodeId};
use crate::ops::traits::Scalar;

impl<T: Scalar> Graph<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// Computes d(root)/d(node) for every ancestor of `root` and accumulates it into
    /// the node's gradient:
    /// 1. topologically sorts the ancestors of `root` (each node once),
    /// 2. clears the gradients of the derived ancestors and seeds `root`'s gradient to 1,
    /// 3. walks the order back to front, pushing each node's gradient onto its
    ///    operands through the node's local derivative rule.
    ///
    /// A node's rule only runs after every consumer of that node has run, so its
    /// gradient already holds the sum over all downstream paths.
    ///
    /// Leaf gradients are accumulated, never overwritten: calling `backward` twice
    /// without [`Graph::zero_grad`] in between adds the second pass on top of the
    /// first. Gradients of derived nodes only describe a single pass and are cleared
    /// before propagation, so resetting the leaves is enough to make a repeated pass
    /// reproduce the first one. Nodes that are not ancestors of `root` are left
    /// untouched.
    pub fn backward(&mut self, root: NodeId) {
        let sorted_nodes = topological_sort(self, root);
        log::debug!(
            "backward from {}: {} of {} nodes reachable",
            root,
            sorted_nodes.len(),
            self.len()
        );

        for &node_id in &sorted_nodes {
            let node = &mut self.nodes[node_id.0];
            if !matches!(node.op, Op::Leaf) {
                node.grad = T::zero();
            }
        }
        self.nodes[root.0].grad = T::one();

        for &node_id in sorted_nodes.iter().rev() {
            let node = &self.nodes[node_id.0];
            let upstream = node.grad;
            let local = node.op.local_grads(node.value, |id| self.nodes[id.0].value);
            for (operand, partial) in local.into_iter().flatten() {
                self.nodes[operand.0].grad += partial * upstream;
            }
        }
    }

    /// Resets the gradient of every node in `ids` to 0.
    ///
    /// Typically called on a model's parameters before each new backward pass.
    pub fn zero_grad<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for id in ids {
            self.nodes[id.0].grad = T::zero();
        }
    }

    /// Resets the gradient of every node in the graph to 0.
    pub fn zero_grad_all(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
