//! Pairwise Pearson correlation matrix over numeric dataset columns.

use hargalens_dataset::Table;
use hargalens_stats::correlation::pearson_pairwise;
use serde::Serialize;

use crate::AggregateError;

/// A symmetric correlation matrix over a selection of numeric columns.
///
/// The diagonal is exactly `1.0`. Off-diagonal entries are `None` when the
/// coefficient is undefined for that pair (a constant column, or too few
/// pairwise-complete observations) — rendered as a blank cell, never as a
/// fabricated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// The selected column names, in matrix order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The coefficient between columns `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values[i][j]
    }

    /// Iterates the matrix rows in column order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }
}

/// Computes the pairwise Pearson correlation matrix over selected columns.
///
/// Coefficients use pairwise-complete observations: for each column pair,
/// rows where either cell is missing are skipped. Pass the columns to
/// correlate in display order; every name must refer to a numeric column.
///
/// # Errors
///
/// - [`AggregateError::InsufficientNumericColumns`] if the dataset itself
///   exposes fewer than 2 numeric columns
/// - [`AggregateError::InsufficientSelection`] if fewer than 2 columns are
///   selected
/// - [`AggregateError::MissingColumn`] / [`AggregateError::NotNumeric`] if a
///   selected column is absent or non-numeric
pub fn correlation_matrix(
    table: &Table,
    selected: &[String],
) -> Result<CorrelationMatrix, AggregateError> {
    let available = table.numeric_column_names().len();
    if available < 2 {
        return Err(AggregateError::InsufficientNumericColumns { found: available });
    }
    if selected.len() < 2 {
        return Err(AggregateError::InsufficientSelection {
            selected: selected.len(),
        });
    }

    let series = selected
        .iter()
        .map(|name| Ok(table.numeric(name)?))
        .collect::<Result<Vec<_>, AggregateError>>()?;

    let k = series.len();
    let mut values = vec![vec![None; k]; k];
    for i in 0..k {
        values[i][i] = Some(1.0);
        for j in (i + 1)..k {
            let r = pearson_pairwise(series[i], series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: selected.to_vec(),
        values,
    })
}
