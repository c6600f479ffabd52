// src/value/mod.rs

use crate::autograd::{Graph, NodeId};
use crate::error::MicrodiffError;
use crate::ops::traits::Scalar;
use crate::ops::{exp_op, pow_op, relu_op, tanh_op};
use std::cell::RefCell;
use std::rc::Rc;

mod traits;

/// A graph shared between several [`Value`] handles.
pub type SharedGraph<T> = Rc<RefCell<Graph<T>>>;

/// Creates an empty graph ready to be shared by [`Value`] handles.
pub fn shared_graph<T: Scalar>() -> SharedGraph<T> {
    Rc::new(RefCell::new(Graph::new()))
}

/// Handle to one node of a shared [`Graph`].
///
/// `Value` adds operator syntax on top of the `*_op` functions:
/// `&a * &b + 2.0` builds the same nodes as `mul_op`, `add_scalar_op` would.
/// Cloning a `Value` clones the handle, not the node.
///
/// All values combined in one expression must come from the same graph; mixing
/// handles of two graphs panics.
#[derive(Clone)]
pub struct Value<T: Scalar> {
    pub(crate) graph: SharedGraph<T>,
    pub(crate) id: NodeId,
}

impl<T: Scalar> Value<T> {
    /// Creates a leaf node in `graph` holding `data`.
    pub fn leaf(graph: &SharedGraph<T>, data: T) -> Self {
        let id = graph.borrow_mut().leaf(data);
        Value {
            graph: Rc::clone(graph),
            id,
        }
    }

    /// Wraps an existing node of `graph`.
    pub fn from_id(graph: &SharedGraph<T>, id: NodeId) -> Self {
        Value {
            graph: Rc::clone(graph),
            id,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this value lives in.
    pub fn graph(&self) -> &SharedGraph<T> {
        &self.graph
    }

    /// Forward value.
    pub fn data(&self) -> T {
        self.graph.borrow().value(self.id)
    }

    /// Gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> T {
        self.graph.borrow().grad(self.id)
    }

    pub fn label(&self) -> Option<String> {
        self.graph.borrow().label(self.id).map(str::to_owned)
    }

    /// Attaches a diagnostic label and returns the same handle.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.graph.borrow_mut().set_label(self.id, label);
        self
    }

    /// Runs the backward pass with this value as the output.
    pub fn backward(&self) {
        self.graph.borrow_mut().backward(self.id);
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.graph.borrow_mut().zero_grad([self.id]);
    }

    /// `self^exponent`.
    ///
    /// # Errors
    /// `MicrodiffError::InvalidExponent` if `exponent` is not finite.
    pub fn pow(&self, exponent: T) -> Result<Value<T>, MicrodiffError> {
        let id = pow_op(&mut *self.graph.borrow_mut(), self.id, exponent)?;
        Ok(self.with_id(id))
    }

    pub fn exp(&self) -> Value<T> {
        self.unary(exp_op)
    }

    pub fn tanh(&self) -> Value<T> {
        self.unary(tanh_op)
    }

    pub fn relu(&self) -> Value<T> {
        self.unary(relu_op)
    }

    fn with_id(&self, id: NodeId) -> Value<T> {
        Value {
            graph: Rc::clone(&self.graph),
            id,
        }
    }

    pub(crate) fn unary<F>(&self, op: F) -> Value<T>
    where
        F: FnOnce(&mut Graph<T>, NodeId) -> NodeId,
    {
        let id = op(&mut *self.graph.borrow_mut(), self.id);
        self.with_id(id)
    }

    /// # Panics
    /// If `rhs` belongs to a different graph.
    pub(crate) fn binary<F>(&self, rhs: &Value<T>, op: F) -> Value<T>
    where
        F: FnOnce(&mut Graph<T>, NodeId, NodeId) -> NodeId,
    {
        assert!(
            Rc::ptr_eq(&self.graph, &rhs.graph),
            "cannot combine values from different graphs ({} and {})",
            self.id,
            rhs.id
        );
        let id = op(&mut *self.graph.borrow_mut(), self.id, rhs.id);
        self.with_id(id)
    }

    pub(crate) fn with_scalar<F>(&self, scalar: T, op: F) -> Value<T>
    where
        F: FnOnce(&mut Graph<T>, NodeId, T) -> NodeId,
    {
        let id = op(&mut *self.graph.borrow_mut(), self.id, scalar);
        self.with_id(id)
    }

    pub(crate) fn with_lhs_scalar<F>(&self, scalar: T, op: F) -> Value<T>
    where
        F: FnOnce(&mut Graph<T>, T, NodeId) -> NodeId,
    {
        let id = op(&mut *self.graph.borrow_mut(), scalar, self.id);
        self.with_id(id)
    }
}
