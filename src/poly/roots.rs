//! Root finding for low-degree polynomials.
//!
//! Stability functions of practical methods have numerators and denominators
//! of modest degree, so a simple scheme is enough: exact shifts for zero
//! roots, closed forms for degrees one and two, and Newton iteration with
//! synthetic-division deflation above that.

use num::{Complex, FromPrimitive, One, Zero};

use crate::{Poly, RealScalar};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error<T> {
    #[error("root finder did not converge within the given constraints")]
    NoConverge(T),

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<Vec<Complex<T>>, Error<Vec<Complex<T>>>>;

impl<T: RealScalar> Poly<T> {
    /// Find all roots of the polynomial.
    ///
    /// `epsilon` bounds the residual `|p(z)|` accepted at a root, `max_iter`
    /// bounds the Newton iterations spent per root.
    ///
    /// # Errors
    /// [`Error::NoConverge`] carries the roots found so far if an iteration
    /// stalls. Constants have no roots and yield an empty vector.
    pub fn roots(&self, epsilon: T, max_iter: usize) -> Result<T> {
        debug_assert!(self.is_normalized());

        let mut this = self.clone();
        let mut roots: Vec<Complex<T>> = this.zero_roots(epsilon);

        loop {
            match this.degree_raw() {
                0 => return Ok(roots),
                1 => {
                    roots.extend(this.linear_roots());
                    return Ok(roots);
                }
                2 => {
                    roots.extend(this.quadratic_roots());
                    return Ok(roots);
                }
                _ => {
                    this.make_monic();
                    let Some(root) = newton_root(&this, epsilon, max_iter) else {
                        return Err(Error::NoConverge(roots));
                    };
                    log::trace!("deflating root {root:?}");
                    roots.push(root);
                    this = this.deflate(root);
                }
            }
        }
    }

    /// Strip roots at the origin by shifting coefficients down.
    fn zero_roots(&mut self, epsilon: T) -> Vec<Complex<T>> {
        debug_assert!(self.is_normalized());

        let mut roots = vec![];
        while self.degree_raw() > 0 && self.0[0].norm() <= epsilon {
            roots.push(Complex::zero());
            *self = self.shift_down(1);
        }
        roots
    }

    fn linear_roots(&self) -> Vec<Complex<T>> {
        debug_assert!(self.is_normalized());
        debug_assert_eq!(self.degree_raw(), 1);

        let b = self.0[0];
        let a = self.0[1];
        vec![-b / a]
    }

    /// Quadratic formula
    fn quadratic_roots(&self) -> Vec<Complex<T>> {
        debug_assert!(self.is_normalized());
        debug_assert_eq!(self.degree_raw(), 2);

        let c = self.0[0];
        let b = self.0[1];
        let a = self.0[2];
        let two = Complex::<T>::from_u8(2).expect("overflow");
        let four = Complex::<T>::from_u8(4).expect("overflow");

        let plus_minus_term = (b * b - four * a * c).sqrt();
        let x1 = (plus_minus_term - b) / (two * a);
        let x2 = (-b - plus_minus_term) / (two * a);
        vec![x1, x2]
    }
}

/// Newton's method from a fixed non-real starting point. The starting point
/// is off the real axis so that conjugate root pairs of real polynomials do
/// not trap the iteration on a symmetry line.
fn newton_root<T: RealScalar>(poly: &Poly<T>, epsilon: T, max_iter: usize) -> Option<Complex<T>> {
    let deriv = poly.diff();
    let mut guess = Complex::new(
        T::from_f64(0.4).expect("overflow"),
        T::from_f64(0.9).expect("overflow"),
    );
    // a rotation of about 53 degrees, used to nudge off critical points
    let rotation = Complex::new(
        T::from_f64(0.6).expect("overflow"),
        T::from_f64(0.8).expect("overflow"),
    );

    for i in 0..max_iter {
        let px = poly.eval(guess);
        if px.norm() <= epsilon {
            log::trace!("newton converged after {i} iterations");
            return Some(guess);
        }
        let pdx = deriv.eval(guess);
        if pdx.is_zero() {
            guess = if guess.is_zero() {
                Complex::one()
            } else {
                guess * rotation
            };
            continue;
        }
        guess = guess - px / pdx;
    }

    (poly.eval(guess).norm() <= epsilon).then_some(guess)
}
