//! Per-column descriptive summaries over the numeric dataset columns.

use hargalens_dataset::Table;
use hargalens_stats::descriptive::ColumnSummary;
use serde::Serialize;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Summarizes every numeric column of the dataset, in declaration order.
///
/// Missing cells are excluded per column; `count` reflects the present
/// observations. A column whose cells are all missing is skipped rather than
/// reported with fabricated zeros. A dataset with no numeric columns yields
/// an empty result.
#[must_use]
pub fn numeric_summaries(table: &Table) -> Vec<NumericSummary> {
    table
        .numeric_column_names()
        .into_iter()
        .filter_map(|name| {
            let cells = table.numeric(name).ok()?;
            let summary = ColumnSummary::from_cells(cells)?;
            Some(NumericSummary {
                column: name.to_string(),
                count: summary.count,
                min: summary.min,
                max: summary.max,
                mean: summary.mean,
                median: summary.median,
                std_dev: summary.std_dev,
            })
        })
        .collect()
}
