// src/value/traits.rs

use super::Value;
use crate::ops::traits::Scalar;
use crate::ops::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, radd_scalar_op,
    rdiv_scalar_op, rmul_scalar_op, rsub_scalar_op, sub_op, sub_scalar_op,
};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Implements a binary operator for every owned/borrowed combination of
/// `Value` operands, for `Value op T`, and for `f32`/`f64` on the left.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:path, $scalar_op:path, $rscalar_op:path) => {
        impl<T: Scalar> $trait<&Value<T>> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &Value<T>) -> Value<T> {
                self.binary(rhs, $op)
            }
        }

        impl<T: Scalar> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                self.binary(&rhs, $op)
            }
        }

        impl<T: Scalar> $trait<&Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &Value<T>) -> Value<T> {
                self.binary(rhs, $op)
            }
        }

        impl<T: Scalar> $trait<Value<T>> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                self.binary(&rhs, $op)
            }
        }

        impl<T: Scalar> $trait<T> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                self.with_scalar(rhs, $scalar_op)
            }
        }

        impl<T: Scalar> $trait<T> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                self.with_scalar(rhs, $scalar_op)
            }
        }

        impl_binary_op!(@lhs_scalar f64, $trait, $method, $rscalar_op);
        impl_binary_op!(@lhs_scalar f32, $trait, $method, $rscalar_op);
    };
    (@lhs_scalar $s:ty, $trait:ident, $method:ident, $rscalar_op:path) => {
        impl $trait<&Value<$s>> for $s {
            type Output = Value<$s>;
            fn $method(self, rhs: &Value<$s>) -> Value<$s> {
                rhs.with_lhs_scalar(self, $rscalar_op)
            }
        }

        impl $trait<Value<$s>> for $s {
            type Output = Value<$s>;
            fn $method(self, rhs: Value<$s>) -> Value<$s> {
                rhs.with_lhs_scalar(self, $rscalar_op)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, add_scalar_op, radd_scalar_op);
impl_binary_op!(Sub, sub, sub_op, sub_scalar_op, rsub_scalar_op);
impl_binary_op!(Mul, mul, mul_op, mul_scalar_op, rmul_scalar_op);
impl_binary_op!(Div, div, div_op, div_scalar_op, rdiv_scalar_op);

impl<T: Scalar> Neg for &Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        self.unary(neg_op)
    }
}

impl<T: Scalar> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        self.unary(neg_op)
    }
}

impl<T: Scalar> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph.borrow();
        write!(
            f,
            "Value(data={}, grad={})",
            graph.value(self.id),
            graph.grad(self.id)
        )
    }
}

impl<T: Scalar> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph.borrow();
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("data", &graph.value(self.id))
            .field("grad", &graph.grad(self.id))
            .field("op", &graph.op(self.id).name())
            .finish()
    }
}
