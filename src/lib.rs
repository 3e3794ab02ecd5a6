//! Columnar table extraction from nested SOAP-style XML responses.
//!
//! A batch of response bodies is decoded into document trees, record
//! subtrees are located anywhere in each tree by a boundary tag, and one
//! compact path expression per output column pulls a value out of every
//! record:
//!
//! ```
//! let body = r#"
//!     <Get_Companies_Response xmlns:wd="urn:example">
//!       <wd:Response_Data>
//!         <wd:Company>
//!           <wd:Company_Data>
//!             <wd:Organization_Name>Acme Holdings</wd:Organization_Name>
//!             <wd:Tax_ID_Type_Reference>
//!               <wd:ID wd:type="WID">f81a</wd:ID>
//!               <wd:ID wd:type="Tax_ID_Type">US-EIN</wd:ID>
//!             </wd:Tax_ID_Type_Reference>
//!           </wd:Company_Data>
//!         </wd:Company>
//!       </wd:Response_Data>
//!     </Get_Companies_Response>"#;
//!
//! let table = xmltab::extract(
//!     &[body],
//!     "Company",
//!     &[
//!         "Company_Data>>Organization_Name^^Name",
//!         "Company_Data>>Tax_ID_Type_Reference>>ID[@wd:type='Tax_ID_Type']^^Tax_ID",
//!     ],
//! )
//! .unwrap();
//! assert_eq!(table.column("Tax_ID").unwrap().value(0), Some("US-EIN"));
//! ```
//!
//! The engine itself is pure and synchronous: missing data degrades to
//! null cells, never errors; the only batch-fatal conditions are a
//! malformed field spec and a duplicate output column, both raised before
//! any response is touched.

use log::debug;
use thiserror::Error;

pub use xmltab_extract::{
    Column, ColumnType, ExtractError, ExtractOptions, Table, build_table, build_table_with,
    evaluate_field, locate_records, match_step,
};
pub use xmltab_fieldpath::{AttrFilter, FieldPath, PathError, Selection, Step, parse_field_path};
pub use xmltab_tree::{Child, Element, TreeError, TreeNode, decode_document};

/// Errors from the batch entry points, which decode and extract in one go.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("response decoding error: {0}")]
    Decode(#[from] TreeError),

    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes a batch of raw XML response bodies and assembles one table.
pub fn extract<S: AsRef<str>>(
    bodies: &[S],
    boundary_tag: &str,
    field_specs: &[&str],
) -> Result<Table, BatchError> {
    extract_with(bodies, boundary_tag, field_specs, &ExtractOptions::default())
}

/// Decodes a batch of raw XML response bodies and assembles one table,
/// with caller-supplied options such as declared column types.
pub fn extract_with<S: AsRef<str>>(
    bodies: &[S],
    boundary_tag: &str,
    field_specs: &[&str],
    options: &ExtractOptions,
) -> Result<Table, BatchError> {
    let responses = bodies
        .iter()
        .map(|body| decode_document(body.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("decoded {} response body(ies)", responses.len());
    Ok(build_table_with(
        &responses,
        boundary_tag,
        field_specs,
        options,
    )?)
}

/// Renders one response body as pretty-printed JSON, for interactive
/// exploration of unfamiliar response shapes before writing field paths.
pub fn to_json_pretty(body: &str) -> Result<String, BatchError> {
    let document = decode_document(body)?;
    Ok(serde_json::to_string_pretty(&document.to_json_value())?)
}
