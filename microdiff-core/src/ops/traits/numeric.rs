use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the floating point types a [`Graph`](crate::Graph) can hold.
///
/// The engine only needs the operations `Float` provides (`exp`, `tanh`, `powf`,
/// `is_finite`, ...) plus in-place accumulation for gradients. Implemented for
/// `f32` and `f64`.
pub trait Scalar: Float + NumAssignOps + Debug + Display + 'static {}

impl Scalar for f32 {}
impl Scalar for f64 {}
