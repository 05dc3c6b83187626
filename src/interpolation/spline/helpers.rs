/// Interval widths `h[i] = x[i+1] - x[i]`.
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut h = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        h.push(x[i + 1] - x[i]);
    }

    h
}

/// Index `i` of the interval `[x[i], x[i+1]]` containing `xq`.
///
/// An exact interior knot resolves to the earlier of its two intervals;
/// both adjacent cubics agree there by construction. Assumes `xq` lies in
/// `[x[0], x[n-1]]`.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let idx = x.partition_point(|&xi| xi < xq);
    idx.saturating_sub(1).min(x.len() - 2)
}
