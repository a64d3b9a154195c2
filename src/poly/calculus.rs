use num::Complex;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    #[must_use]
    pub fn diff(&self) -> Self {
        debug_assert!(self.is_normalized());

        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return Self::from_real_slice(&[T::zero()]);
        }

        let coeffs: Vec<_> = self
            .0
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(n, c)| {
                let n = T::from_usize(n).expect("degree too high to convert to T");
                c * Complex::from(n)
            })
            .collect();
        Self::from_complex_vec(coeffs)
    }
}
