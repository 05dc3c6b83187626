//! Configuration for the natural cubic spline.
//!
//! Provides [`NaturalSplineCfg`], a borrowing builder over the data table
//! and evaluation points, with a default minimum allowed spacing between
//! adjacent `x` data; [`DEFAULT_X_TOL`].
//!
//! [`NaturalSplineCfg`] — fields
//! - `x`      : knot x-values, strictly increasing
//! - `y`      : values at the knots
//! - `x_eval` : x-values to evaluate (one-shot [`interpolate`] path)
//! - `x_tol`  : minimum spacing between adjacent knots
//!
//! Setters reject malformed input eagerly; [`NaturalSplineCfg::validate`]
//! re-runs the full ordered check so a builder never trusts a config
//! assembled elsewhere.
//!
//! [`interpolate`]: crate::interpolation::spline::natural::interpolate

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;

/// Minimum number of knots for a cubic spline.
pub const MIN_POINTS: usize = 3;

#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    x: &'a [f64],
    y: &'a [f64],
    x_eval: &'a [f64],
    x_min_spacing: f64,
}

impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self {
            x: &[],
            y: &[],
            x_eval: &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if v.len() < MIN_POINTS {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        for i in 1..v.len() {
            if (v[i] - v[i - 1]).abs() < self.x_min_spacing {
                return Err(InterpolationError::DuplicateX {
                    x1: v[i - 1],
                    x2: v[i],
                });
            }
            if v[i] <= v[i - 1] {
                return Err(InterpolationError::NonIncreasingX);
            }
        }

        self.x = v;

        // length agreement check
        // symmetric with set_y
        let y_len = self.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }

        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let x_len = self.x.len();
        let y_len = v.len();
        if x_len != 0 && y_len != x_len {
            return Err(InterpolationError::UnequalLength { x_len, y_len });
        }

        self.y = v;
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.x_eval = v;
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }

        self.x_min_spacing = v;
        Ok(self)
    }

    /// Full table validation, in contract order.
    ///
    /// 1. `x` and `y` have equal length.
    /// 2. At least [`MIN_POINTS`] knots.
    /// 3. All table entries finite.
    /// 4. Knots separated by at least `x_tol` and strictly increasing.
    ///
    /// The first failing check determines the error.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < MIN_POINTS {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        if let Some(idx) = non_finite_idx(x) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        for i in 1..x.len() {
            if (x[i] - x[i - 1]).abs() < self.x_min_spacing {
                return Err(InterpolationError::DuplicateX {
                    x1: x[i - 1],
                    x2: x[i],
                });
            }
            if x[i] <= x[i - 1] {
                return Err(InterpolationError::NonIncreasingX);
            }
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] {
        self.x
    }
    pub fn y(&self) -> &'a [f64] {
        self.y
    }
    pub fn x_eval(&self) -> &'a [f64] {
        self.x_eval
    }
    pub fn x_min_spacing(&self) -> f64 {
        self.x_min_spacing
    }
}

impl Default for NaturalSplineCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
