//! Writer framework: indentation, the code writer and the rendering engine.

mod code_writer;
mod emitter;
mod indent;

pub use code_writer::{CodeWriter, IndentGuard};
pub use emitter::{Emitter, RenderedUnit, UnitKind, UnitRef};
pub use indent::Indent;
