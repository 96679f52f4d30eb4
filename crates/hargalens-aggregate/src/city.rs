//! City-grouped aggregations: mean price and listing counts.

use std::collections::HashMap;

use hargalens_dataset::Table;
use hargalens_stats::descriptive::mean;
use serde::Serialize;

use crate::{AggregateError, CITY, PRICE_IN_RP};

/// Mean listing price for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMeanPrice {
    pub city: String,
    pub mean_price: f64,
}

/// Number of listings in one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: u64,
}

/// Computes the top-N cities by mean listing price.
///
/// Rows missing either the city or the price are skipped. The result holds
/// the `top_n` cities with the highest mean price, in **ascending** order of
/// mean — a horizontal bar chart drawn bottom-to-top then shows the most
/// expensive city topmost. `top_n` of zero yields an empty result.
///
/// # Errors
///
/// Returns [`AggregateError::MissingColumn`] if the dataset lacks a `city`
/// or `price_in_rp` column.
pub fn top_city_mean_price(
    table: &Table,
    top_n: usize,
) -> Result<Vec<CityMeanPrice>, AggregateError> {
    let cities = table.text(CITY)?;
    let prices = table.numeric(PRICE_IN_RP)?;

    let mut order = Vec::new();
    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for (city, price) in cities.iter().zip(prices) {
        let (Some(city), Some(price)) = (city, price) else {
            continue;
        };
        groups
            .entry(city.as_str())
            .or_insert_with(|| {
                order.push(city.as_str());
                Vec::new()
            })
            .push(*price);
    }

    // Every grouped city has at least one price, so the mean always exists.
    let mut means = order
        .into_iter()
        .filter_map(|city| {
            mean(&groups[city]).map(|mean_price| CityMeanPrice {
                city: city.to_string(),
                mean_price,
            })
        })
        .collect::<Vec<_>>();

    // Highest mean first, then keep only the top N and flip for display.
    means.sort_by(|a, b| b.mean_price.total_cmp(&a.mean_price));
    means.truncate(top_n);
    means.reverse();
    Ok(means)
}

/// Counts listings per city, in first-appearance order.
///
/// Rows without a city value are not counted. The order is the natural
/// grouping order of the dataset, deliberately unsorted.
///
/// # Errors
///
/// Returns [`AggregateError::MissingColumn`] if the dataset lacks a `city`
/// column.
pub fn listing_counts(table: &Table) -> Result<Vec<CityCount>, AggregateError> {
    let cities = table.text(CITY)?;

    let mut counts: Vec<CityCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for city in cities.iter().flatten() {
        match index.get(city.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(city, counts.len());
                counts.push(CityCount {
                    city: city.clone(),
                    count: 1,
                });
            }
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use hargalens_dataset::Column;

    use super::*;

    fn table_with_cities() -> Table {
        // A averages 100, B averages 300, C averages 200.
        let cities = ["A", "A", "B", "C", "B", "C"]
            .into_iter()
            .map(|c| Some(c.to_string()))
            .collect();
        let prices = [50.0, 150.0, 250.0, 180.0, 350.0, 220.0]
            .into_iter()
            .map(Some)
            .collect();
        Table::new(vec![
            ("city".into(), Column::Text(cities)),
            ("price_in_rp".into(), Column::Numeric(prices)),
        ])
        .unwrap()
    }

    #[test]
    fn test_top_n_is_ascending_with_largest_last() {
        let result = top_city_mean_price(&table_with_cities(), 5).unwrap();
        let cities = result.iter().map(|r| r.city.as_str()).collect::<Vec<_>>();
        assert_eq!(cities, ["A", "C", "B"]);
        assert_eq!(result[0].mean_price, 100.0);
        assert_eq!(result[1].mean_price, 200.0);
        assert_eq!(result[2].mean_price, 300.0);
    }

    #[test]
    fn test_top_n_truncates_to_highest_means() {
        let result = top_city_mean_price(&table_with_cities(), 2).unwrap();
        let cities = result.iter().map(|r| r.city.as_str()).collect::<Vec<_>>();
        assert_eq!(cities, ["C", "B"]);
    }

    #[test]
    fn test_top_n_zero_is_empty() {
        assert!(top_city_mean_price(&table_with_cities(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_rows_with_missing_values_are_skipped() {
        let table = Table::new(vec![
            (
                "city".into(),
                Column::Text(vec![Some("A".into()), None, Some("A".into())]),
            ),
            (
                "price_in_rp".into(),
                Column::Numeric(vec![Some(100.0), Some(999.0), None]),
            ),
        ])
        .unwrap();
        let result = top_city_mean_price(&table, 5).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].mean_price, 100.0);
    }

    #[test]
    fn test_missing_city_column_is_an_error_value() {
        let table = Table::new(vec![(
            "price_in_rp".into(),
            Column::Numeric(vec![Some(1.0)]),
        )])
        .unwrap();
        assert!(matches!(
            top_city_mean_price(&table, 5),
            Err(AggregateError::MissingColumn { .. })
        ));
        assert!(matches!(
            listing_counts(&table),
            Err(AggregateError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_counts_sum_to_city_bearing_rows_in_first_appearance_order() {
        let result = listing_counts(&table_with_cities()).unwrap();
        let cities = result.iter().map(|r| r.city.as_str()).collect::<Vec<_>>();
        assert_eq!(cities, ["A", "B", "C"]);
        let total: u64 = result.iter().map(|r| r.count).sum();
        assert_eq!(total, 6);
    }
}
