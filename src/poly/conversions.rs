use itertools::Itertools;
use num::{bigint::ToBigInt, rational::Ratio, Complex, Integer, ToPrimitive};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The same as [`Poly::new`]
    #[must_use]
    pub fn from_complex_slice(value: &[Complex<T>]) -> Self {
        Self::new(value)
    }

    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn from_complex_vec(value: Vec<Complex<T>>) -> Self {
        Self(value).normalize()
    }

    #[must_use]
    pub fn from_complex_iterator(coeffs: impl Iterator<Item = Complex<T>>) -> Self {
        Self(coeffs.collect_vec()).normalize()
    }

    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().copied())
    }

    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn from_real_vec(value: Vec<T>) -> Self {
        Self::from_real_slice(value.as_slice())
    }

    #[must_use]
    pub fn from_real_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self::from_complex_iterator(coeffs.map(Complex::from))
    }

    /// Create a polynomial from real coefficients given in the conventional
    /// highest-degree-first notation.
    ///
    /// ```
    /// # use stability_regions::{poly, Poly};
    /// // z^2 + 2z + 3
    /// let p = Poly::from_descending_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(p, poly![3.0, 2.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_descending_slice(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().rev().copied())
    }

    /// Convert exact rational coefficients (least significant first) to
    /// floating point.
    ///
    /// Exact coefficients are numerically useless for bulk grid evaluation,
    /// so they must pass through here before being handed to a renderer.
    /// Returns `None` if a coefficient does not fit the target scalar.
    pub fn from_rational_slice<I>(value: &[Ratio<I>]) -> Option<Self>
    where
        I: Integer + ToPrimitive + ToBigInt + Clone,
    {
        let coeffs: Option<Vec<T>> = value
            .iter()
            .map(|r| r.to_f64().and_then(T::from_f64))
            .collect();
        Some(Self::from_real_vec(coeffs?))
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for Poly<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::from_complex_slice(value)
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for Poly<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::from_complex_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<Complex<T>> {
    fn from(value: Poly<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use num::rational::Ratio;

    use crate::Poly64;

    #[test]
    fn rational_coefficients() {
        let p = Poly64::from_rational_slice(&[Ratio::new(1i64, 1), Ratio::new(1i64, 2)]).unwrap();
        assert_eq!(p, poly![1.0, 0.5]);
    }
}
