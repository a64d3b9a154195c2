use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // zero-polynomials are stored as a single zero coefficient
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(mut self) -> Self {
        while self.0.len() > 1 && self.0.last().expect("non-empty").is_zero() {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(Complex::zero());
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }

    /// Number of coefficients, including zero coefficients below the leading
    /// term.
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.len_raw()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The degree of the polynomial. Constants (including the zero
    /// polynomial) have degree zero.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.degree_raw()
    }

    /// The coefficient of the highest-degree term.
    #[must_use]
    pub fn leading_coeff(&self) -> Complex<T> {
        debug_assert!(self.is_normalized());
        self.0[self.degree_raw()]
    }

    /// The coefficient of the degree-`degree` term, or `None` beyond the
    /// leading term.
    #[must_use]
    pub fn coeff(&self, degree: usize) -> Option<Complex<T>> {
        self.0.get(degree).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.iter()
    }

    /// Evaluate the polynomial at a point using Horner's scheme.
    ///
    /// ```
    /// # use stability_regions::{complex, poly};
    /// // 1 + 2z + z^2
    /// let p = poly![1.0, 2.0, 1.0];
    /// assert_eq!(p.eval(complex!(-1.0)), complex!(0.0));
    /// assert_eq!(p.eval(complex!(1.0)), complex!(4.0));
    /// ```
    #[must_use]
    pub fn eval(&self, z: Complex<T>) -> Complex<T> {
        let mut y = Complex::<T>::zero();
        for c in self.0.iter().rev() {
            y = y * z + c;
        }
        y
    }

    /// Divide by `z^n`, discarding the `n` least significant coefficients.
    pub(crate) fn shift_down(&self, n: usize) -> Self {
        debug_assert!(self.is_normalized());
        Self(self.0[n.min(self.degree_raw())..].to_vec()).normalize()
    }

    /// Scale a polynomial in-place such that the leading coefficient is 1,
    /// preserving the roots.
    pub(crate) fn make_monic(&mut self) {
        debug_assert!(self.is_normalized());
        let last_coeff = self.leading_coeff();
        if last_coeff.is_one() {
            // already monic
            return;
        }
        for c in &mut self.0 {
            *c /= last_coeff;
        }
    }

    /// Factor out one root via synthetic division by `(z - r)`, dropping the
    /// remainder.
    pub(crate) fn deflate(&self, r: Complex<T>) -> Self {
        debug_assert!(self.is_normalized());
        let n = self.degree_raw();
        if n == 0 {
            return self.clone();
        }
        let mut quot = vec![Complex::<T>::zero(); n];
        let mut carry = self.0[n];
        for i in (0..n).rev() {
            quot[i] = carry;
            carry = self.0[i] + carry * r;
        }
        Self(quot).normalize()
    }
}
