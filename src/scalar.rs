use std::fmt::Debug;

use num::{traits::NumAssign, Float, FromPrimitive};

/// Float-like scalars that can back the real and imaginary parts of
/// polynomial coefficients.
pub trait RealScalar: Float + NumAssign + FromPrimitive + Debug + 'static {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
