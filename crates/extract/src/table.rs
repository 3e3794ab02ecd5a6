//! The columnar output table.

/// Declared type of an output column.
///
/// Carried as metadata for downstream consumers (dataframe conversion,
/// database loads). Cell values are always nullable text; this engine
/// never infers or coerces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    #[default]
    Text,
    Integer,
    Float,
    Boolean,
    Date,
}

/// One named output column with a value (or null) per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    values: Vec<Option<String>>,
}

impl Column {
    pub(crate) fn new(name: String, column_type: ColumnType, values: Vec<Option<String>>) -> Self {
        Self {
            name,
            column_type,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, row: usize) -> Option<&str> {
        self.values.get(row).and_then(Option::as_deref)
    }
}

/// The assembled table: fixed column order, one value (or null) per row
/// per column, every column the same length.
///
/// Row order is (response order, then record-discovery order within a
/// response) and is stable given identical inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub(crate) fn new(columns: Vec<Column>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        Self { columns, row_count }
    }

    /// Columns in the caller's field list order, never reordered or
    /// dropped, even when every value in a column is null.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// One row as (column name, value) pairs in column order.
    pub fn row(&self, index: usize) -> Option<Vec<(&str, Option<&str>)>> {
        if index >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name(), c.value(index)))
                .collect(),
        )
    }
}
