//! Rectangular sample grids over the complex plane.

use num::complex::Complex64;

use crate::Bounds;

/// `n` evenly spaced values covering `[a, b]`, endpoints included.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![a];
    }
    let step = (b - a) / (n - 1) as f64;
    (0..n).map(|i| a + step * i as f64).collect()
}

/// A rectangular lattice of complex sample points `z = x + iy`, built from
/// two linear coordinate sequences by outer product.
///
/// Constructed fresh per render call and discarded afterwards; row `i` of
/// [`Grid::map`] output corresponds to `y[i]`, column `j` to `x[j]`, which is
/// the layout contour traces expect.
#[derive(Clone, Debug)]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<Vec<Complex64>>,
}

impl Grid {
    /// Sample `bounds` with `resolution` points along each axis.
    #[must_use]
    pub fn new(bounds: Bounds, resolution: usize) -> Self {
        let x = linspace(bounds.x_min, bounds.x_max, resolution);
        let y = linspace(bounds.y_min, bounds.y_max, resolution);
        let z = y
            .iter()
            .map(|&yi| x.iter().map(|&xj| Complex64::new(xj, yi)).collect())
            .collect();
        Self { x, y, z }
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn points(&self) -> &[Vec<Complex64>] {
        &self.z
    }

    /// Evaluate a scalar field over the lattice.
    #[must_use]
    pub fn map(&self, f: impl Fn(Complex64) -> f64) -> Vec<Vec<f64>> {
        self.z
            .iter()
            .map(|row| row.iter().map(|&z| f(z)).collect())
            .collect()
    }
}
