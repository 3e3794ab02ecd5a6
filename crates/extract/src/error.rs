use thiserror::Error;
use xmltab_fieldpath::PathError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("field path error: {0}")]
    MalformedPath(#[from] PathError),

    #[error("duplicate output column '{0}'")]
    DuplicateColumn(String),
}
