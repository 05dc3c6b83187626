use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// evaluates a single query point
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    /// fails on the first out-of-range or non-finite query
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
