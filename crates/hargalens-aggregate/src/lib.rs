//! Descriptive aggregations over the static listings dataset.
//!
//! Each operation here backs one visualization: grouped mean prices per
//! city, the year-built price trend, listing counts, per-column descriptive
//! summaries, and the feature correlation matrix. They are pure functions of the loaded [`Table`] plus
//! request-scoped parameters, recomputed from scratch on every invocation —
//! the source dataset never changes within a session, so there is nothing to
//! cache or invalidate.
//!
//! Dataset-shape problems (a missing `city` column, too few numeric
//! features) are reported as [`AggregateError`] values for the boundary to
//! surface as warnings; they are never fatal and no partial result is
//! fabricated in their place.
//!
//! [`Table`]: hargalens_dataset::Table

pub use self::{
    city::{CityCount, CityMeanPrice, listing_counts, top_city_mean_price},
    correlation::{CorrelationMatrix, correlation_matrix},
    summary::{NumericSummary, numeric_summaries},
    trend::{TrendPoint, year_built_price_trend},
};

mod city;
mod correlation;
mod summary;
mod trend;

/// Grouping column for the city-based aggregations.
pub const CITY: &str = "city";
/// Listing price column, in rupiah.
pub const PRICE_IN_RP: &str = "price_in_rp";
/// Construction-year column.
pub const YEAR_BUILT: &str = "year_built";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AggregateError {
    #[display("column '{name}' not available in dataset")]
    MissingColumn { name: String },
    #[display("dataset has {found} numeric columns, need at least 2 for a correlation matrix")]
    InsufficientNumericColumns { found: usize },
    #[display("{selected} column(s) selected, need at least 2 for a correlation matrix")]
    InsufficientSelection { selected: usize },
    #[display("column '{name}' is not numeric")]
    NotNumeric { name: String },
}

impl From<hargalens_dataset::ColumnError> for AggregateError {
    fn from(err: hargalens_dataset::ColumnError) -> Self {
        match err {
            hargalens_dataset::ColumnError::Missing { name } => {
                AggregateError::MissingColumn { name }
            }
            hargalens_dataset::ColumnError::WrongKind { name, .. } => {
                AggregateError::NotNumeric { name }
            }
        }
    }
}
