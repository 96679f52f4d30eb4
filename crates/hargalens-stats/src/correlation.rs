//! Pearson product-moment correlation.
//!
//! Correlation coefficients measure the linear relationship between two
//! series of observations. The aggregation layer uses these to build the
//! feature correlation matrix over the listings dataset, where individual
//! cells may be missing; [`pearson_pairwise`] skips incomplete pairs the
//! same way `pandas.DataFrame.corr` does.

/// Computes the Pearson correlation coefficient between two paired series.
///
/// Both slices must have the same length. The result is clamped to
/// `[-1.0, 1.0]` to absorb floating-point rounding at the extremes.
///
/// # Returns
///
/// * `Some(r)` - the coefficient, when both series have at least 2 values
///   and non-zero variance
/// * `None` - for fewer than 2 pairs, or when either series is constant
///   (the coefficient is undefined)
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// # Examples
///
/// ```
/// use hargalens_stats::correlation::pearson;
///
/// let xs = [1.0, 2.0, 3.0];
/// assert_eq!(pearson(&xs, &[2.0, 4.0, 6.0]), Some(1.0));
/// assert_eq!(pearson(&xs, &[3.0, 2.0, 1.0]), Some(-1.0));
/// assert_eq!(pearson(&xs, &[5.0, 5.0, 5.0]), None); // constant series
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    assert_eq!(xs.len(), ys.len(), "series must be the same length");

    if xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Computes the Pearson coefficient over pairwise-complete observations.
///
/// Rows where either side is `None` are skipped before computing the
/// coefficient, matching the pairwise-deletion semantics of
/// `pandas.DataFrame.corr`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// # Examples
///
/// ```
/// use hargalens_stats::correlation::pearson_pairwise;
///
/// let xs = [Some(1.0), None, Some(2.0), Some(3.0)];
/// let ys = [Some(2.0), Some(9.0), Some(4.0), Some(6.0)];
/// assert_eq!(pearson_pairwise(&xs, &ys), Some(1.0));
/// ```
#[must_use]
pub fn pearson_pairwise(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    assert_eq!(xs.len(), ys.len(), "series must be the same length");

    let (complete_x, complete_y): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();
    pearson(&complete_x, &complete_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(pearson(&xs, &ys), Some(1.0));
    }

    #[test]
    fn test_perfect_negative() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [8.0, 6.0, 4.0, 2.0];
        assert_eq!(pearson(&xs, &ys), Some(-1.0));
    }

    #[test]
    fn test_symmetry() {
        let xs = [1.0, 3.0, 2.0, 5.0, 4.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 5.0];
        let r_xy = pearson(&xs, &ys).unwrap();
        let r_yx = pearson(&ys, &xs).unwrap();
        assert!((r_xy - r_yx).abs() < 1e-12);
        assert!((-1.0..=1.0).contains(&r_xy));
    }

    #[test]
    fn test_too_few_pairs() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[], &[]), None);
    }

    #[test]
    fn test_constant_series_is_undefined() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [7.0, 7.0, 7.0];
        assert_eq!(pearson(&xs, &ys), None);
        assert_eq!(pearson(&ys, &xs), None);
    }

    #[test]
    fn test_pairwise_skips_incomplete_rows() {
        // The None rows would break the perfect correlation if included.
        let xs = [Some(1.0), Some(2.0), None, Some(3.0)];
        let ys = [Some(3.0), Some(6.0), Some(100.0), Some(9.0)];
        assert_eq!(pearson_pairwise(&xs, &ys), Some(1.0));
    }

    #[test]
    fn test_pairwise_all_incomplete() {
        let xs = [None, Some(2.0)];
        let ys = [Some(3.0), None];
        assert_eq!(pearson_pairwise(&xs, &ys), None);
    }
}
