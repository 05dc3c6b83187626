//! Defines the struct returned by the one-shot interpolation entry point.
//!
//! [`InterpolationReport`] summarizes key metadata about an interpolation
//! run: the algorithm used, number of data and evaluation points, and the
//! interpolated values themselves.

/// Interpolation algorithm variants.
/// - [`Algorithm::SplineNatural`] natural cubic spline
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    SplineNatural,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::SplineNatural => "natural cubic spline",
        }
    }
}

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
        }
    }
}
