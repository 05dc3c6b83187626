//! # riffle
//!
//! Natural cubic spline interpolation over tabulated data.
//!
//! Given a strictly increasing table of knots `x` and values `y`, the crate
//! fits the unique piecewise cubic that passes through every sample, is C²
//! at internal knots, and has zero second derivative at both endpoints.
//! The fitted [`interpolation::spline::natural::NaturalSpline`] is immutable
//! and can be evaluated any number of times through the
//! [`interpolation::Interpolator`] trait.
//!
//! ```
//! use riffle::interpolation::Interpolator;
//! use riffle::interpolation::spline::natural::{NaturalSpline, NaturalSplineCfg};
//!
//! let x = [1.6, 2.0, 3.0, 4.0, 5.0];
//! let y = [1.0, 4.0, -0.9, 16.0, 55.0];
//!
//! let cfg = NaturalSplineCfg::new().set_x(&x)?.set_y(&y)?;
//! let spline = NaturalSpline::build(&cfg)?;
//!
//! let yq = spline.eval(2.5)?;
//! assert!((yq - 1.7396710526315788).abs() < 1e-9);
//! # Ok::<(), riffle::interpolation::errors::InterpolationError>(())
//! ```

pub mod interpolation;
