//! Read-only access to the static listings dataset.
//!
//! The dataset is a fixed tabular file of residential listings (rows are
//! listings, columns include `city`, `price_in_rp`, `year_built`, and other
//! numeric attributes). It is loaded exactly once per process and held as
//! immutable state for the process lifetime; nothing in this crate mutates a
//! loaded table.
//!
//! # Overview
//!
//! - [`Table`] is an in-memory table with named, typed columns. Cells may be
//!   missing; a missing cell is `None`, never a sentinel value.
//! - [`loader::load_csv`] performs the one-time load from a CSV file,
//!   inferring each column as numeric or text from its contents.
//!
//! There is deliberately no schema validation beyond column-length agreement:
//! the source file's schema is fixed externally, and consumers that need a
//! particular column ask for it by name and handle its absence.
//!
//! # Examples
//!
//! ```
//! use hargalens_dataset::{Column, Table};
//!
//! let table = Table::new(vec![
//!     (
//!         "city".into(),
//!         Column::Text(vec![Some("Jakarta".into()), Some("Bogor".into())]),
//!     ),
//!     (
//!         "price_in_rp".into(),
//!         Column::Numeric(vec![Some(1_500_000_000.0), None]),
//!     ),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert!(table.has_column("city"));
//! assert_eq!(table.numeric("price_in_rp").unwrap()[0], Some(1_500_000_000.0));
//! ```

pub use self::table::{Column, ColumnError, Table, TableShapeError};

pub mod loader;
mod table;
