use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("malformed field path '{0}': {1}")]
    Malformed(String, String),
}

impl PathError {
    /// The field spec string that failed to parse.
    pub fn spec(&self) -> &str {
        let PathError::Malformed(spec, _) = self;
        spec
    }
}
