//! The extraction engine: locating record subtrees in decoded response
//! documents, evaluating field paths against them, and assembling the
//! results into one columnar table.
//!
//! Everything here is a pure, synchronous tree walk. Missing data is never
//! an error: an absent tag, an absent attribute or a response with no
//! records degrades to null cells or zero rows. The only batch-fatal
//! conditions are a malformed field spec and a duplicate output column,
//! both raised before any response is touched.

pub mod assembler;
pub mod error;
pub mod evaluate;
pub mod locate;
pub mod matcher;
pub mod table;

// --- Public API ---
pub use assembler::{ExtractOptions, build_table, build_table_with};
pub use error::ExtractError;
pub use evaluate::evaluate_field;
pub use locate::locate_records;
pub use matcher::match_step;
pub use table::{Column, ColumnType, Table};
