use num::{Complex, One};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The truncated Taylor polynomial of the exponential, up to the given
    /// order: the degree-`i` coefficient is `1/i!`.
    ///
    /// This is the stability polynomial of the `order`-stage explicit
    /// Runge-Kutta methods of matching order (up to order four).
    ///
    /// ```
    /// # use stability_regions::{poly, Poly};
    /// assert_eq!(Poly::taylor_exp(0), poly![1.0]);
    /// assert_eq!(Poly::taylor_exp(3), poly![1.0, 1.0, 0.5, 1.0 / 6.0]);
    /// ```
    // TODO: technically it can panic for absurd orders, would need boundary
    //       testing to write a proper doc comment
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn taylor_exp(order: usize) -> Self {
        let mut coeffs = Vec::with_capacity(order + 1);
        let mut c = Complex::<T>::one();
        coeffs.push(c);
        for i in 1..=order {
            c = c / T::from_usize(i).expect("overflow");
            coeffs.push(c);
        }
        Self::from_complex_vec(coeffs)
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use crate::Poly64;

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn taylor_exp_coefficients() {
        let p = Poly64::taylor_exp(5);
        assert_eq!(p.degree(), 5);
        let mut factorial = 1.0;
        for i in 0..=5 {
            factorial *= if i == 0 { 1.0 } else { i as f64 };
            let c = p.coeff(i).unwrap();
            assert!((c.re - 1.0 / factorial).abs() < 1E-15);
            assert_eq!(c.im, 0.0);
        }
    }

    #[test]
    fn taylor_exp_at_zero() {
        assert_eq!(Poly64::taylor_exp(7).eval(Complex64::from(0.0)), Complex64::from(1.0));
    }
}
