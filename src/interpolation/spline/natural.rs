//! Natural Cubic Spline Interpolation
//!
//! Fits the unique piecewise cubic through `(x[i], y[i])` with continuous
//! first and second derivatives at internal knots and zero second
//! derivative at both endpoints (the
//! [natural boundary condition](https://en.wikipedia.org/wiki/Spline_interpolation)).
//!
//! On interval `i` the spline is
//!
//! ```text
//! S_i(t) = a[i] + b[i] t + c[i] t^2 + d[i] t^3,    t = x - x[i]
//! ```
//!
//! with `a[i] = y[i]`. The `c` coefficients solve a strictly diagonally
//! dominant tridiagonal system, eliminated in a single forward sweep and
//! back-substitution; `b` and `d` follow from `c` per interval.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::{Algorithm, InterpolationReport};
use crate::interpolation::spline::helpers::{find_interval, spacings};
use crate::interpolation::traits::Interpolator;

pub use crate::interpolation::config::NaturalSplineCfg;

/// A fitted natural cubic spline.
///
/// Owns its table and coefficient vectors; immutable after
/// [`NaturalSpline::build`], so shared evaluation from multiple threads
/// needs no locking. Reusable for any number of queries via
/// [`Interpolator::eval`] / [`Interpolator::eval_many`].
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    b: Vec<f64>,
    // len n; c[n-1] = 0 under the natural boundary, kept as input to the
    // last interval's b and d
    c: Vec<f64>,
    d: Vec<f64>,
}

impl NaturalSpline {
    /// Fits the spline to the table in `cfg`.
    ///
    /// # Errors
    /// Table validation errors from [`NaturalSplineCfg::validate`], in
    /// contract order: [`InterpolationError::UnequalLength`],
    /// [`InterpolationError::InsufficientPoints`],
    /// [`InterpolationError::NonFiniteVec`],
    /// [`InterpolationError::DuplicateX`],
    /// [`InterpolationError::NonIncreasingX`].
    ///
    /// On a validated table the fit itself cannot fail: the tridiagonal
    /// system is strictly diagonally dominant, hence uniquely solvable.
    pub fn build(cfg: &NaturalSplineCfg) -> Result<Self, InterpolationError> {
        cfg.validate()?;

        let x = cfg.x();
        let y = cfg.y();

        let h = spacings(x);
        let c = solve_c_natural(x, &h, y);
        let (b, d) = coeffs_from_c(&h, y, &c);

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            b,
            c,
            d,
        })
    }

    /// Number of knots in the table.
    pub fn n_knots(&self) -> usize {
        self.x.len()
    }

    pub fn knots(&self) -> &[f64] {
        &self.x
    }

    pub fn values(&self) -> &[f64] {
        &self.y
    }

    /// Coefficients `(a, b, c, d)` of the cubic on
    /// `[knots()[i], knots()[i+1]]`, in the local variable `t = x - knots()[i]`.
    ///
    /// Returns `None` when `i` is not a valid interval index.
    pub fn segment(&self, i: usize) -> Option<(f64, f64, f64, f64)> {
        if i + 1 >= self.x.len() {
            return None;
        }
        Some((self.y[i], self.b[i], self.c[i], self.d[i]))
    }
}

impl Interpolator for NaturalSpline {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }

        let n = self.x.len();
        let x_min = self.x[0];
        let x_max = self.x[n - 1];

        // domain check, both endpoints inclusive
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds {
                got: xq,
                x_min,
                x_max,
            });
        }

        let lo = find_interval(&self.x, xq);

        // unreachable for in-range queries; surfaces a search miss instead
        // of returning an undefined value
        if xq < self.x[lo] || xq > self.x[lo + 1] {
            return Err(InterpolationError::NoBracketingInterval { got: xq });
        }

        let dx = xq - self.x[lo];
        let s = self.y[lo]
            + self.b[lo] * dx
            + self.c[lo] * dx * dx
            + self.d[lo] * dx * dx * dx;

        Ok(s)
    }
}

/// Solves the tridiagonal system for the second-derivative terms `c[0..n]`.
///
/// Interior row `i`:
/// `h[i-1] c[i-1] + 2(h[i-1]+h[i]) c[i] + h[i] c[i+1] = alpha[i]` with
/// `alpha[i] = 3(y[i+1]-y[i])/h[i] - 3(y[i]-y[i-1])/h[i-1]`; the natural
/// boundary pins `c[0] = c[n-1] = 0`. Forward elimination keeps only the
/// scaled superdiagonal `mu` and eliminated rhs `z`; no pivoting is needed
/// since the matrix is strictly diagonally dominant.
fn solve_c_natural(x: &[f64], h: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();

    let mut alpha = vec![0.0; n];
    for i in 1..n - 1 {
        alpha[i] = 3.0 * (y[i + 1] - y[i]) / h[i] - 3.0 * (y[i] - y[i - 1]) / h[i - 1];
    }

    // boundary rows are identity: mu[0] = z[0] = 0 and z[n-1] = 0
    let mut mu = vec![0.0; n];
    let mut z = vec![0.0; n];
    for i in 1..n - 1 {
        // 2(x[i+1]-x[i-1]) == 2(h[i-1]+h[i])
        let l = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / l;
        z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l;
    }

    let mut c = vec![0.0; n];
    for j in (0..n - 1).rev() {
        c[j] = z[j] - mu[j] * c[j + 1];
    }

    c
}

/// Per-interval `b[i]`, `d[i]` from the solved `c` (`a[i]` is `y[i]`).
fn coeffs_from_c(h: &[f64], y: &[f64], c: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = y.len();
    let mut bcoef = vec![0.0; n - 1];
    let mut dcoef = vec![0.0; n - 1];

    for i in 0..n - 1 {
        bcoef[i] = (y[i + 1] - y[i]) / h[i] - (h[i] * (c[i + 1] + 2.0 * c[i])) / 3.0;
        dcoef[i] = (c[i + 1] - c[i]) / (3.0 * h[i]);
    }

    (bcoef, dcoef)
}

/// Fits a natural cubic spline and evaluates it in one call.
///
/// # Behavior
/// Builds a [`NaturalSpline`] from `cfg`'s table, then evaluates every
/// point in `cfg.x_eval()`. Evaluation points outside `[x[0], x[-1]]`
/// abort the run.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"natural cubic spline"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated y-values
///
/// # Errors
/// - table validation errors from [`NaturalSpline::build`]
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = NaturalSpline::build(&cfg)?;
    let evals = cfg.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::SplineNatural,
        spline.n_knots(),
        evals.len(),
    );
    report.evaluated = spline.eval_many(evals)?;

    Ok(report)
}
