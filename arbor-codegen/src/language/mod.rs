//! Language abstraction: what a backend provides to the rendering engine.

mod naming;
mod segmenter;
mod translator;
mod writer;

pub use naming::NamingConvention;
pub use segmenter::{ForeignNamespace, PathSegmenter, PathSegments, relative_namespace};
pub use translator::TypeTranslator;
pub use writer::{DeclarationContext, LanguageWriter, NamespaceContext};
