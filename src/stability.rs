//! The stability function of a method and its classification.

use num::{Complex, One};

use crate::{Grid, Poly, RealScalar};

/// Whether the absolute stability region `{z : |R(z)| <= 1}` extends to
/// infinity, judged from the degrees and leading coefficients of `R`'s
/// numerator and denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundedness {
    Bounded,
    /// `R(z) -> 0` as `z -> infinity`, so all of the far plane is stable.
    Unbounded,
    /// `|R(z)|` tends to 1 from an unknown side; the region may or may not
    /// be bounded.
    MaybeUnbounded,
}

/// A method's amplification factor `R(z) = p(z)/q(z)` as a pair of
/// polynomials.
///
/// `z` stands for `(step size) * (eigenvalue)`; one step of the method
/// scales the corresponding solution component by `R(z)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StabilityFunction<T: RealScalar> {
    num: Poly<T>,
    den: Poly<T>,
}

impl<T: RealScalar> StabilityFunction<T> {
    pub fn new(num: Poly<T>, den: Poly<T>) -> Self {
        Self { num, den }
    }

    /// Numerator `p`
    #[must_use]
    pub const fn num(&self) -> &Poly<T> {
        &self.num
    }

    /// Denominator `q`
    #[must_use]
    pub const fn den(&self) -> &Poly<T> {
        &self.den
    }

    /// Evaluate `R(z) = p(z)/q(z)`.
    ///
    /// At a pole that coincides exactly with `z` the division yields an
    /// infinite or undefined value, never a panic; downstream thresholding
    /// treats such points as unstable.
    #[must_use]
    pub fn eval(&self, z: Complex<T>) -> Complex<T> {
        self.num.eval(z) / self.den.eval(z)
    }

    /// The absolute stability predicate `|R(z)| <= 1`.
    #[must_use]
    pub fn is_stable_at(&self, z: Complex<T>) -> bool {
        self.eval(z).norm() <= T::one()
    }

    /// Classify whether the stability region can extend to infinity.
    ///
    /// The region is unbounded iff `|R(z)| <= 1` for all large `z`, which
    /// holds when `deg p < deg q`, or when the degrees tie and the leading
    /// coefficient of `p` is smaller in magnitude. A tie in both leaves the
    /// question open.
    #[must_use]
    pub fn boundedness(&self) -> Boundedness {
        let m = self.num.degree();
        let n = self.den.degree();
        let p_lead = self.num.leading_coeff().norm();
        let q_lead = self.den.leading_coeff().norm();

        if m < n || (m == n && p_lead < q_lead) {
            Boundedness::Unbounded
        } else if m == n && p_lead == q_lead {
            Boundedness::MaybeUnbounded
        } else {
            Boundedness::Bounded
        }
    }

    /// The Pade approximation to the exponential function with numerator of
    /// degree `k` and denominator of degree `j`.
    ///
    /// Coefficients are built from degree zero upward by the standard
    /// recurrence; the result matches the Taylor series of `exp` through
    /// order `k + j`.
    // TODO: technically it can panic for absurd degrees, would need boundary
    //       testing to write a proper doc comment
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn pade_exp(k: usize, j: usize) -> Self {
        let f = |x: usize| T::from_usize(x).expect("overflow");

        let mut p_coeffs = Vec::with_capacity(k + 1);
        p_coeffs.push(T::one());
        for n in 1..=k {
            let new_coeff = p_coeffs[n - 1] * f(k - n + 1) / f(j + k - n + 1) / f(n);
            p_coeffs.push(new_coeff);
        }

        let mut q_coeffs = Vec::with_capacity(j + 1);
        q_coeffs.push(T::one());
        for n in 1..=j {
            let new_coeff = -q_coeffs[n - 1] * f(j - n + 1) / f(j + k - n + 1) / f(n);
            q_coeffs.push(new_coeff);
        }

        Self::new(Poly::from_real_vec(p_coeffs), Poly::from_real_vec(q_coeffs))
    }

    /// The truncated Taylor series of the exponential as a stability
    /// function with denominator 1. See [`Poly::taylor_exp`].
    #[must_use]
    pub fn taylor_exp(order: usize) -> Self {
        Self::new(Poly::taylor_exp(order), Poly::one())
    }
}

impl StabilityFunction<f64> {
    /// Evaluate `|R(scale * z)|` elementwise over a sample grid.
    ///
    /// `scale` is often used to normalize for the stage number of a
    /// multistage method; pass 1 for the plain magnitude.
    #[must_use]
    pub fn magnitude_field(&self, grid: &Grid, scale: f64) -> Vec<Vec<f64>> {
        grid.map(|z| self.eval(z * scale).norm())
    }

    /// Evaluate the order-star ratio `|R(z)/exp(z)|` elementwise over a
    /// sample grid.
    #[must_use]
    pub fn order_star_field(&self, grid: &Grid) -> Vec<Vec<f64>> {
        grid.map(|z| (self.eval(z) / z.exp()).norm())
    }
}

#[cfg(test)]
mod test {
    use num::{complex::Complex64, One};

    use super::{Boundedness, StabilityFunction};
    use crate::Poly64;

    #[test]
    fn pade_structure() {
        let r = StabilityFunction::<f64>::pade_exp(2, 3);
        assert_eq!(r.num().degree(), 2);
        assert_eq!(r.den().degree(), 3);
        assert_eq!(r.num().eval(Complex64::from(0.0)), Complex64::one());
        assert_eq!(r.den().eval(Complex64::from(0.0)), Complex64::one());
    }

    #[test]
    fn pade_1_1_is_trapezoidal() {
        // (1 + z/2) / (1 - z/2)
        let r = StabilityFunction::<f64>::pade_exp(1, 1);
        assert_eq!(*r.num(), poly![1.0, 0.5]);
        assert_eq!(*r.den(), poly![1.0, -0.5]);
    }

    #[test]
    fn pade_0_0_is_one() {
        let r = StabilityFunction::<f64>::pade_exp(0, 0);
        assert!(r.num().is_one());
        assert!(r.den().is_one());
    }

    #[test]
    fn forward_euler_predicate() {
        // R(z) = 1 + z
        let r = StabilityFunction::taylor_exp(1);
        assert!(r.is_stable_at(Complex64::from(0.0)));
        assert!(r.is_stable_at(Complex64::from(-1.0)));
        assert!(!r.is_stable_at(Complex64::from(3.0)));
    }

    #[test]
    fn boundedness_explicit_method() {
        assert_eq!(
            StabilityFunction::<f64>::taylor_exp(4).boundedness(),
            Boundedness::Bounded
        );
    }

    #[test]
    fn boundedness_backward_euler() {
        // R(z) = 1 / (1 - z), degree 0 over degree 1
        let r = StabilityFunction::new(Poly64::one(), poly![1.0, -1.0]);
        assert_eq!(r.boundedness(), Boundedness::Unbounded);
    }

    #[test]
    fn boundedness_equal_degrees() {
        // trapezoidal rule: equal degrees, equal leading magnitudes
        assert_eq!(
            StabilityFunction::<f64>::pade_exp(1, 1).boundedness(),
            Boundedness::MaybeUnbounded
        );
        // equal degrees, smaller numerator leading coefficient
        let r = StabilityFunction::new(poly![1.0, 0.25], poly![1.0, -0.5]);
        assert_eq!(r.boundedness(), Boundedness::Unbounded);
    }
}
