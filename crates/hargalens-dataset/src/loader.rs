//! One-time CSV load of the listings dataset.
//!
//! Column typing is inferred from the data: a column whose non-empty cells
//! all parse as `f64` becomes [`Column::Numeric`], anything else stays
//! [`Column::Text`]. Empty cells become `None` in either case. This mirrors
//! how the source spreadsheet is consumed: as an opaque table with named,
//! typed columns, not a validated schema.

use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use anyhow::{Context, bail};

use crate::{Column, Table};

/// Loads a listings table from a CSV file with a header row.
///
/// # Errors
///
/// Fails if the file cannot be opened or parsed, if headers are duplicated,
/// or if any record has a different width than the header.
pub fn load_csv<P>(path: P) -> anyhow::Result<Table>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut seen = HashSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            bail!("duplicate column '{header}' in {}", path.display());
        }
    }

    // The csv reader rejects records whose width differs from the header.
    let mut cells: Vec<Vec<Option<String>>> = vec![vec![]; headers.len()];
    for record in reader.records() {
        let record = record.with_context(|| format!("failed to parse {}", path.display()))?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            let field = field.trim();
            column.push((!field.is_empty()).then(|| field.to_string()));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| (name, infer_column(cells)))
        .collect();

    // Per-column lengths all derive from the same record stream.
    Ok(Table::new(columns)?)
}

/// Types a column as numeric when every present cell parses as `f64`.
fn infer_column(cells: Vec<Option<String>>) -> Column {
    let all_numeric = cells
        .iter()
        .flatten()
        .all(|cell| cell.parse::<f64>().is_ok());
    if all_numeric && cells.iter().any(Option::is_some) {
        Column::Numeric(
            cells
                .into_iter()
                .map(|cell| cell.and_then(|c| c.parse().ok()))
                .collect(),
        )
    } else {
        Column::Text(cells)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp_csv(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "hargalens-loader-test-{}-{:?}.csv",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_infers_column_kinds() {
        let path = write_temp_csv(
            "city,price_in_rp,year_built\n\
             Jakarta,1500000000,2015\n\
             Bogor,,2008\n\
             Depok,900000000,\n",
        );
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.numeric_column_names(), ["price_in_rp", "year_built"]);

        let prices = table.numeric("price_in_rp").unwrap();
        assert_eq!(prices[0], Some(1_500_000_000.0));
        assert_eq!(prices[1], None);

        let cities = table.text("city").unwrap();
        assert_eq!(cities[0].as_deref(), Some("Jakarta"));
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let path = write_temp_csv("code\n12\nA-3\n");
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(table.numeric("code").is_err());
        assert_eq!(table.text("code").unwrap()[0].as_deref(), Some("12"));
    }

    #[test]
    fn test_all_empty_column_stays_text() {
        let path = write_temp_csv("a,b\n1,\n2,\n");
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table.numeric_column_names(), ["a"]);
        assert_eq!(table.text("b").unwrap(), &[None, None]);
    }

    #[test]
    fn test_duplicate_headers_rejected() {
        let path = write_temp_csv("city,city\nJakarta,Bogor\n");
        let result = load_csv(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_csv("definitely/not/here.csv").is_err());
    }
}
