// Implementation of traits related to numeric operations and operators

use itertools::{EitherOrBoth, Itertools};
use num::{Complex, One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let (mut longest, shortest) = if self.len_raw() >= rhs.len_raw() {
            (self.0, rhs.0)
        } else {
            (rhs.0, self.0)
        };
        longest
            .iter_mut()
            .zip_longest(shortest.iter())
            .for_each(|p| {
                if let EitherOrBoth::Both(l, r) = p {
                    *l += r;
                }
            });
        Self(longest).normalize()
    }
}

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        self + rhs.clone()
    }
}

impl<T: RealScalar> Sub<Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs.neg()
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        self - rhs.clone()
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for c in &mut self.0 {
            *c = -*c;
        }
        self
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    /// Convolution of the coefficients
    fn mul(self, rhs: Self) -> Self::Output {
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![Complex::<T>::zero(); self.len_raw() + rhs.len_raw() - 1];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Self(coeffs).normalize()
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        self * rhs.clone()
    }
}

impl<T: RealScalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self(vec![Complex::zero()])
    }

    fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }
}

impl<T: RealScalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![Complex::one()])
    }

    fn is_one(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_one()
    }
}

#[cfg(test)]
mod test {
    use num::Zero;

    use crate::Poly64;

    #[test]
    fn add_different_lengths() {
        let p = poly![1.0, 2.0] + poly![0.0, 0.0, 3.0];
        assert_eq!(p, poly![1.0, 2.0, 3.0]);
    }

    /// Cancellation must re-normalize
    #[test]
    fn sub_cancels_leading() {
        let p = poly![1.0, 2.0] - poly![0.0, 2.0];
        assert_eq!(p.degree(), 0);
    }

    #[test]
    fn mul_convolution() {
        // (1 + z)(1 - z) = 1 - z^2
        let p = poly![1.0, 1.0] * poly![1.0, -1.0];
        assert_eq!(p, poly![1.0, 0.0, -1.0]);
    }

    #[test]
    fn mul_zero() {
        let p = poly![1.0, 1.0] * Poly64::zero();
        assert!(p.is_zero());
    }
}
