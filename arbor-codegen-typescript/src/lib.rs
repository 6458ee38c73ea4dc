//! TypeScript backend for the Arbor client generator.
//!
//! Renders each class of the code tree into its own ES module under a
//! directory per namespace, plus an `index.ts` barrel per namespace that
//! declares classes.

mod import;
mod naming;
mod segmenter;
mod type_translator;
mod writer;

use arbor_codegen::BackendEntry;

pub use import::{Import, package_module, relative_module};
pub use naming::TS_NAMING;
pub use segmenter::TypeScriptPathSegmenter;
pub use type_translator::TypeScriptTypeTranslator;
pub use writer::TypeScriptWriter;

/// Registry entry for the TypeScript backend.
pub const BACKEND: BackendEntry = BackendEntry::new(
    "typescript",
    &["ts"],
    "TypeScript client modules",
    TypeScriptWriter::boxed,
);
