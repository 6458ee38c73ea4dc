//! Java backend for the Arbor client generator.
//!
//! Renders each class of the code tree into `<Package path>/<ClassName>.java`
//! and each namespace into a `package-info.java`.
//!
//! ```ignore
//! use arbor_codegen::{BackendOptions, Emitter};
//! use arbor_codegen_java::JavaWriter;
//!
//! let backend = JavaWriter::new(&BackendOptions::new("src/main/java", "graph"));
//! let units = Emitter::new(&tree, &backend).render_all()?;
//! ```

mod naming;
mod segmenter;
mod type_translator;
mod writer;

use arbor_codegen::BackendEntry;

pub use naming::JAVA_NAMING;
pub use segmenter::JavaPathSegmenter;
pub use type_translator::JavaTypeTranslator;
pub use writer::JavaWriter;

/// Registry entry for the Java backend.
pub const BACKEND: BackendEntry = BackendEntry::new("java", &[], "Java client classes", JavaWriter::boxed);
