//! Language writer framework for the Arbor client generator.
//!
//! This crate turns a read-only [`arbor_ir::CodeTree`] into source text. A
//! backend implements [`LanguageWriter`] together with a [`TypeTranslator`]
//! and a [`PathSegmenter`]; the [`Emitter`] walks the tree, manages
//! indentation and hands each element to the backend in order.
//!
//! # Modules
//!
//! - [`writer`]: [`CodeWriter`], indentation guards and the [`Emitter`]
//! - [`language`]: backend traits and naming conventions
//! - [`lower`]: indexer-to-accessor lowering
//! - [`registry`]: backend lookup by language identifier
//! - [`generation`]: output sinks

pub mod error;
pub mod generation;
pub mod language;
pub mod lower;
pub mod registry;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod writer;

pub use error::{ConfigError, RenderError};
pub use generation::{DirectorySink, MemorySink, OutputSink, WriteStats, write_units};
pub use language::{
    DeclarationContext, ForeignNamespace, LanguageWriter, NamespaceContext, NamingConvention,
    PathSegmenter, PathSegments, TypeTranslator,
};
pub use lower::lower_indexer;
pub use registry::{BackendEntry, BackendFactory, BackendOptions, BackendRegistry};
pub use writer::{CodeWriter, Emitter, Indent, IndentGuard, RenderedUnit, UnitKind, UnitRef};
