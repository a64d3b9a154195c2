#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Diagnostics for numerical time-integration methods whose amplification
//! factor is a rational function `R(z) = p(z)/q(z)`.
//!
//! The crate renders two classical pictures of such a method:
//!
//! - the *absolute stability region* `{z : |R(z)| <= 1}`, with plot bounds
//!   discovered automatically ([`plot_stability_region`]);
//! - the *order star* `{z : |R(z)/exp(z)| <= 1}`, over a fixed rectangle
//!   ([`plot_order_star`]).
//!
//! [`StabilityFunction`] pairs the numerator and denominator polynomials and
//! provides the two standard rational approximations to the exponential as
//! constructors: truncated Taylor series and Pade approximants. Figures are
//! assembled with the [`plotly`] crate; displaying or exporting them is the
//! caller's business.

pub use num;

/// Shorthand for creating complex numbers, typically as coefficients or
/// sample points.
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::Complex::from($re)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

/// Shorthand for creating a [`Poly`] from real coefficients, least
/// significant first.
#[macro_export]
macro_rules! poly {
    ($($coeff:expr),+ $(,)?) => {
        $crate::Poly::from_real_slice(&[$($coeff),+])
    };
}

mod scalar;
pub use scalar::RealScalar;

mod error;
pub use error::Error;

mod poly;
pub use poly::{roots, Poly, Poly64};

mod stability;
pub use stability::{Boundedness, StabilityFunction};

mod bounds;
pub use bounds::{find_plot_bounds, Bounds};

mod grid;
pub use grid::Grid;

mod plot;
pub use plot::{
    plot_order_star, plot_stability_region, OrderStarOptions, StabilityRegionOptions, Subplot,
};
