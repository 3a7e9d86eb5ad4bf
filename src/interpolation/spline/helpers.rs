
/// Step lengths `h[i] = x[i+1] - x[i]`; empty for fewer than two nodes.
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Index `lo` of the segment `[x[lo], x[lo+1]]` holding `xq`.
///
/// Assumes `x.len() >= 2` and `x[0] <= xq <= x[n-1]`; the right endpoint
/// maps to the last segment.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
