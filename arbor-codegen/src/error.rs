//! Errors raised while selecting a backend or rendering a tree.

use std::path::PathBuf;

use arbor_ir::ElementId;

use crate::language::ForeignNamespace;

/// A backend could not be selected or configured.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown language '{name}', expected one of: {}", available.join(", "))]
    UnknownLanguage { name: String, available: Vec<String> },

    #[error("output root '{}' is not usable: {reason}", path.display())]
    UnusableOutputRoot { path: PathBuf, reason: String },

    #[error("client namespace name must not be empty")]
    EmptyNamespace,
}

/// Rendering a unit failed.
///
/// Each variant names the backend and the offending element.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{backend}: element {id} does not exist")]
    UnknownElement { backend: &'static str, id: ElementId },

    #[error("{backend}: '{name}' is a {found}, expected a {expected}")]
    UnexpectedKind {
        backend: &'static str,
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{backend}: {source}")]
    Placement {
        backend: &'static str,
        source: ForeignNamespace,
    },
}
