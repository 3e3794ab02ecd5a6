//! A compact path expression language for pulling single fields out of
//! deeply nested XML response documents.
//!
//! One expression describes one output column: `>>` descends through nested
//! elements, `[@attr='value']` disambiguates repeated siblings by an
//! attribute-equality filter, `@@` selects a named attribute instead of
//! element text, and a trailing `^^name` renames the output column.
//!
//! ```text
//! Tax_ID_Data>>Tax_ID_Type_Reference>>ID[@wd:type='Tax_ID_Type']^^Tax_ID
//! ```

pub mod ast;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::{AttrFilter, FieldPath, Selection, Step};
pub use error::PathError;
pub use parser::parse_field_path;
