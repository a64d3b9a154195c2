use num::Complex;
use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The root finder did not converge while locating the roots or poles
    /// for an overlay.
    #[error("could not locate the roots requested for the overlay")]
    RootOverlay(#[source] crate::roots::Error<Vec<Complex<f64>>>),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
