/// Descriptive statistics over the present cells of a numeric column.
///
/// Missing cells are excluded before anything is computed; `count` is the
/// number of present observations, not the column length. The median of an
/// even-length column is the mean of the two middle values, matching
/// `pandas.DataFrame.describe`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Number of present (non-missing) cells.
    pub count: usize,
    /// The smallest present value.
    pub min: f64,
    /// The largest present value.
    pub max: f64,
    /// The arithmetic mean of the present values.
    pub mean: f64,
    /// The median of the present values.
    pub median: f64,
    /// The population standard deviation of the present values.
    pub std_dev: f64,
}

impl ColumnSummary {
    /// Summarizes a column of optional cells.
    ///
    /// # Returns
    ///
    /// * `Some(ColumnSummary)` - if at least one cell is present
    /// * `None` - if every cell is missing (or the column is empty)
    ///
    /// # Examples
    ///
    /// ```
    /// # use hargalens_stats::descriptive::ColumnSummary;
    /// let cells = [Some(5.0), None, Some(1.0), Some(3.0)];
    /// let summary = ColumnSummary::from_cells(&cells).unwrap();
    /// assert_eq!(summary.count, 3);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// assert_eq!(summary.median, 3.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_cells(cells: &[Option<f64>]) -> Option<Self> {
        let mut values = cells.iter().copied().flatten().collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let min = values[0];
        let max = values[count - 1];
        let mean = mean(&values)?;
        let median = if count % 2 == 0 {
            (values[count / 2 - 1] + values[count / 2]) / 2.0
        } else {
            values[count / 2]
        };
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}

/// Computes the arithmetic mean of a dataset.
///
/// Returns `None` for an empty dataset.
///
/// # Examples
///
/// ```
/// # use hargalens_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().sum::<f64>() / values.len() as f64)
}
