//! Batch assembly of decoded responses into one columnar table.

use crate::error::ExtractError;
use crate::evaluate::evaluate_field;
use crate::locate::locate_records;
use crate::table::{Column, ColumnType, Table};
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;
use xmltab_fieldpath::{FieldPath, parse_field_path};
use xmltab_tree::TreeNode;

/// Caller-tunable knobs for table assembly.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Declared types for output columns, keyed by resolved output name.
    /// Columns without an entry default to [`ColumnType::Text`]. The
    /// declaration is metadata only; values are never coerced.
    pub column_types: HashMap<String, ColumnType>,
}

/// Builds one table from a batch of decoded responses with default options.
pub fn build_table(
    responses: &[TreeNode],
    boundary_tag: &str,
    field_specs: &[&str],
) -> Result<Table, ExtractError> {
    build_table_with(responses, boundary_tag, field_specs, &ExtractOptions::default())
}

/// Builds one table from a batch of decoded responses.
///
/// Every field spec is parsed before any response is touched; a malformed
/// spec, or two specs resolving to the same output name, fails the whole
/// batch up front. Nothing found during traversal ever does: missing data
/// degrades to null cells, and a response without the boundary tag
/// contributes zero rows. Responses are processed in input order and rows
/// appended in discovery order, so identical inputs produce identical
/// tables.
pub fn build_table_with(
    responses: &[TreeNode],
    boundary_tag: &str,
    field_specs: &[&str],
    options: &ExtractOptions,
) -> Result<Table, ExtractError> {
    let paths = field_specs
        .iter()
        .map(|spec| parse_field_path(spec))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(name) = paths.iter().map(FieldPath::output_name).duplicates().next() {
        return Err(ExtractError::DuplicateColumn(name.to_string()));
    }

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); paths.len()];
    let mut row_count = 0;
    for (index, response) in responses.iter().enumerate() {
        let records = locate_records(response, boundary_tag);
        debug!(
            "response {}: {} '{}' record(s)",
            index,
            records.len(),
            boundary_tag
        );
        for record in records {
            for (column, path) in values.iter_mut().zip(&paths) {
                column.push(evaluate_field(record, path).map(str::to_string));
            }
            row_count += 1;
        }
    }

    let columns = paths
        .iter()
        .zip(values)
        .map(|(path, column_values)| {
            let name = path.output_name().to_string();
            let column_type = options.column_types.get(&name).copied().unwrap_or_default();
            Column::new(name, column_type, column_values)
        })
        .collect();
    Ok(Table::new(columns, row_count))
}
