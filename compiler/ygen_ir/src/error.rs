//! IR compilation errors.
//!
//! Every failure aborts the whole compilation and no partial IR is
//! returned. Inputs are static schema data, so nothing here is retried.

use thiserror::Error;

/// Result alias for IR compilation.
pub type Result<T, E = IrError> = std::result::Result<T, E>;

/// Error from indexing, path resolution or directory compilation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum IrError {
    /// A required collection argument was absent.
    #[error("{what} null")]
    NullInput { what: &'static str },

    /// Distinct schema paths produced the same directory name.
    #[error("directory name conflict(s) exist: {name:?} is produced by {}", .paths.join(", "))]
    StructuralConflict { name: String, paths: Vec<String> },

    /// The requested field key is not in the applicable field set.
    #[error("field name {field:?} does not exist in Directory {directory}")]
    MissingField { field: String, directory: String },

    /// A field's schema path does not lie below its directory's path.
    #[error("field {field_path} is not a valid child of {directory_path}")]
    InvalidPath {
        field_path: String,
        directory_path: String,
    },

    /// A directory or field refers to an entry outside the schema tree.
    #[error("entry id {raw} is not part of the schema tree")]
    UnknownEntry { raw: u32 },

    /// The language mapper rejected a node.
    #[error(transparent)]
    Mapper(#[from] MapperError),
}

/// Error returned by a `LangMapper` implementation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct MapperError {
    message: String,
}

impl MapperError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
