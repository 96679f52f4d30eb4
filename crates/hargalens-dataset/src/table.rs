/// A single column of the dataset.
///
/// Cells are optional: a missing cell in the source file stays missing here
/// and is skipped or dropped by the aggregation layer, depending on the
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// A column whose non-empty cells all parse as numbers.
    Numeric(Vec<Option<f64>>),
    /// Any other column, kept as raw text.
    Text(Vec<Option<String>>),
}

impl Column {
    /// Returns the number of cells (including missing ones).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(cells) => cells.len(),
            Column::Text(cells) => cells.len(),
        }
    }

    /// Returns true if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ColumnError {
    #[display("column '{name}' not found in dataset")]
    Missing { name: String },
    #[display("column '{name}' is not a {expected} column")]
    WrongKind {
        name: String,
        expected: &'static str,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("column '{name}' has {len} rows, expected {expected}")]
pub struct TableShapeError {
    pub name: String,
    pub len: usize,
    pub expected: usize,
}

/// An immutable in-memory table with named, typed columns.
///
/// Columns keep their declaration order, which is the order they appear in
/// the source file. All columns have the same row count, enforced at
/// construction.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<(String, Column)>,
    row_count: usize,
}

impl Table {
    /// Creates a table from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`TableShapeError`] if the columns disagree on row count.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self, TableShapeError> {
        let row_count = columns.first().map_or(0, |(_, c)| c.len());
        for (name, column) in &columns {
            if column.len() != row_count {
                return Err(TableShapeError {
                    name: name.clone(),
                    len: column.len(),
                    expected: row_count,
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns all column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Returns true if a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns the names of all numeric columns, in declaration order.
    #[must_use]
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, c)| matches!(c, Column::Numeric(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Returns the cells of a numeric column.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::Missing`] if no such column exists, or
    /// [`ColumnError::WrongKind`] if the column is not numeric.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>], ColumnError> {
        match self.column(name)? {
            Column::Numeric(cells) => Ok(cells),
            Column::Text(_) => Err(ColumnError::WrongKind {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Returns the cells of a text column.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::Missing`] if no such column exists, or
    /// [`ColumnError::WrongKind`] if the column is not text.
    pub fn text(&self, name: &str) -> Result<&[Option<String>], ColumnError> {
        match self.column(name)? {
            Column::Text(cells) => Ok(cells),
            Column::Numeric(_) => Err(ColumnError::WrongKind {
                name: name.to_string(),
                expected: "text",
            }),
        }
    }

    fn column(&self, name: &str) -> Result<&Column, ColumnError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| ColumnError::Missing {
                name: name.to_string(),
            })
    }
}
