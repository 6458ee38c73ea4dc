use thiserror::Error;

use crate::ElementId;

/// Result type for code model construction.
pub type Result<T> = std::result::Result<T, IrError>;

/// Errors raised while a producer builds a [`CodeTree`](crate::CodeTree).
#[derive(Debug, Error)]
pub enum IrError {
    #[error("namespace '{parent}' already contains a namespace named '{segment}'")]
    DuplicateNamespace { parent: String, segment: String },

    #[error("namespace '{parent}' cannot contain a namespace named '{segment}': {reason}")]
    InvalidNamespaceSegment {
        parent: String,
        segment: String,
        reason: &'static str,
    },

    #[error("method '{method}' already has a parameter named '{parameter}'")]
    DuplicateParameter { method: String, parameter: String },

    #[error("element {0} does not exist")]
    UnknownElement(ElementId),

    #[error("'{name}' is a {found}, expected a {expected}")]
    UnexpectedKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid model document")]
    Document(#[from] serde_json::Error),
}
