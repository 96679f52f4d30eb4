//! Statistical primitives for the hargalens project.
//!
//! This crate provides the small set of statistics the aggregation layer
//! needs:
//!
//! - **Descriptive statistics**: per-column summaries (count, min, max, mean,
//!   median, standard deviation) over cells that may be missing
//! - **Pearson correlation**: pairwise correlation coefficients, including a
//!   variant that tolerates missing observations
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing dataset columns
//! - [`correlation`]: Pearson product-moment correlation
//!
//! # Examples
//!
//! ## Summarizing a column
//!
//! ```
//! use hargalens_stats::descriptive::ColumnSummary;
//!
//! let cells = [Some(1.0), Some(2.0), None, Some(3.0)];
//! let summary = ColumnSummary::from_cells(&cells).unwrap();
//! assert_eq!(summary.count, 3);
//! assert_eq!(summary.mean, 2.0);
//! ```
//!
//! ## Computing a correlation coefficient
//!
//! ```
//! use hargalens_stats::correlation::pearson;
//!
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! let ys = [2.0, 4.0, 6.0, 8.0];
//! assert_eq!(pearson(&xs, &ys), Some(1.0));
//! ```

pub mod correlation;
pub mod descriptive;
