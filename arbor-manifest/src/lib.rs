//! arbor.toml parsing and validation.
//!
//! ```toml
//! [client]
//! language = "java"
//! namespace = "graph"
//! model = "model.json"
//! output = "generated"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::ArborToml;
pub use manifest::{ClientConfig, Manifest};
pub use validate::ParseContext;
