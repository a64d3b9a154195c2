//! Plot rectangles and automatic bound discovery for stability regions.

use num::complex::Complex64;

use crate::grid::linspace;

/// Bounds below this magnitude on all four sides are considered degenerate.
const DEGENERATE_TOL: f64 = 1E-14;

/// Resolution of the lattice used to probe the predicate per round.
const SCAN_RES: usize = 101;

/// How many times the rectangle may grow before giving up.
const MAX_ROUNDS: usize = 12;

/// An axis-aligned plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when all four sides sit at (numerical) zero, i.e. the rectangle
    /// has collapsed onto the origin.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.x_min.abs() < DEGENERATE_TOL
            && self.x_max.abs() < DEGENERATE_TOL
            && self.y_min.abs() < DEGENERATE_TOL
            && self.y_max.abs() < DEGENERATE_TOL
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-5.0, 5.0, -5.0, 5.0)
    }
}

/// Search for a rectangle enclosing every point where `predicate` holds,
/// starting from `guess`.
///
/// Best effort: the predicate is probed on a coarse lattice, the bounding box
/// of the satisfied samples is taken, and any side the box touches is grown
/// and re-scanned for a bounded number of rounds. The final box is padded by
/// one lattice cell. If no sample ever satisfies the predicate, the
/// degenerate all-zero rectangle is returned.
pub fn find_plot_bounds<F>(predicate: F, guess: Bounds) -> Bounds
where
    F: Fn(Complex64) -> bool,
{
    let mut rect = guess;

    for _ in 0..MAX_ROUNDS {
        let xs = linspace(rect.x_min, rect.x_max, SCAN_RES);
        let ys = linspace(rect.y_min, rect.y_max, SCAN_RES);

        let mut hit: Option<Bounds> = None;
        let mut touches = [false; 4]; // left, right, bottom, top
        for (i, &y) in ys.iter().enumerate() {
            for (j, &x) in xs.iter().enumerate() {
                if !predicate(Complex64::new(x, y)) {
                    continue;
                }
                hit = Some(match hit {
                    None => Bounds::new(x, x, y, y),
                    Some(b) => Bounds::new(
                        b.x_min.min(x),
                        b.x_max.max(x),
                        b.y_min.min(y),
                        b.y_max.max(y),
                    ),
                });
                touches[0] |= j == 0;
                touches[1] |= j == SCAN_RES - 1;
                touches[2] |= i == 0;
                touches[3] |= i == SCAN_RES - 1;
            }
        }

        let Some(bbox) = hit else {
            return Bounds::new(0.0, 0.0, 0.0, 0.0);
        };

        if touches.iter().any(|&t| t) {
            let (w, h) = (rect.width(), rect.height());
            if touches[0] {
                rect.x_min -= 0.5 * w;
            }
            if touches[1] {
                rect.x_max += 0.5 * w;
            }
            if touches[2] {
                rect.y_min -= 0.5 * h;
            }
            if touches[3] {
                rect.y_max += 0.5 * h;
            }
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let dx = rect.width() / (SCAN_RES - 1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let dy = rect.height() / (SCAN_RES - 1) as f64;
        return Bounds::new(
            bbox.x_min - dx,
            bbox.x_max + dx,
            bbox.y_min - dy,
            bbox.y_max + dy,
        );
    }

    // the region kept touching the scan edges; hand back what we have
    rect
}
