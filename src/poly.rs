use num::Complex;

use crate::RealScalar;

mod base;
mod calculus;
mod conversions;
mod impl_num;
pub mod roots;
mod special_funcs;

/// Polynomial as a dense list of complex coefficients, least significant
/// first (the coefficient at index `i` belongs to the degree-`i` term).
///
/// Polynomials are kept normalized: no trailing zero coefficients, and the
/// zero polynomial is the single coefficient `[0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

pub type Poly64 = Poly<f64>;

impl<T: RealScalar> Poly<T> {
    /// Create a new polynomial from a slice of complex coefficients, least
    /// significant first.
    ///
    /// ```
    /// # use stability_regions::Poly;
    /// use num::Complex;
    ///
    /// // 1 + 2z
    /// let p = Poly::new(&[Complex::from(1.0), Complex::from(2.0)]);
    /// assert_eq!(p.degree(), 1);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_vec()).normalize()
    }
}
