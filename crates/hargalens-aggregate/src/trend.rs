//! Mean price by construction year and city, for the trend chart.

use std::collections::BTreeMap;

use hargalens_dataset::Table;
use hargalens_stats::descriptive::mean;
use serde::Serialize;

use crate::{AggregateError, CITY, PRICE_IN_RP, YEAR_BUILT};

/// One point of the year-built price trend: the mean listing price for a
/// `(year, city)` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub city: String,
    pub mean_price: f64,
}

/// Computes the long-form year-built price trend table.
///
/// Rows missing any of `year_built`, `price_in_rp`, or `city` are dropped;
/// the rest are grouped by `(year, city)` and averaged. The result is
/// ordered by year, then city, ready for a multi-series line chart.
///
/// # Errors
///
/// Returns [`AggregateError::MissingColumn`] if any of the three columns is
/// absent.
pub fn year_built_price_trend(table: &Table) -> Result<Vec<TrendPoint>, AggregateError> {
    let years = table.numeric(YEAR_BUILT)?;
    let prices = table.numeric(PRICE_IN_RP)?;
    let cities = table.text(CITY)?;

    let mut groups: BTreeMap<(i32, &str), Vec<f64>> = BTreeMap::new();
    for ((year, price), city) in years.iter().zip(prices).zip(cities) {
        let (Some(year), Some(price), Some(city)) = (year, price, city) else {
            continue;
        };
        // Construction years are integral in the source data.
        #[expect(clippy::cast_possible_truncation)]
        let year = year.round() as i32;
        groups.entry((year, city.as_str())).or_default().push(*price);
    }

    // Every group has at least one price, so the mean always exists.
    let points = groups
        .into_iter()
        .filter_map(|((year, city), prices)| {
            mean(&prices).map(|mean_price| TrendPoint {
                year,
                city: city.to_string(),
                mean_price,
            })
        })
        .collect();
    Ok(points)
}
