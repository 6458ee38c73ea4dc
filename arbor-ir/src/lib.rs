//! Abstract code model for the Arbor client generator.
//!
//! This crate provides the language-agnostic tree that every backend renders.
//! The tree is built once by a producer (the builder API on [`CodeTree`] or a
//! JSON model document) and is read-only afterwards.
//!
//! # Architecture
//!
//! ```text
//! API description → producer → arbor-ir (CodeTree) → arbor-codegen → backends
//! ```
//!
//! Elements live in an arena and are addressed by [`ElementId`]. Parent links
//! are navigational only; ownership runs from a namespace or class down to its
//! children.

mod class;
mod document;
mod element;
mod error;
mod members;
mod tree;
mod types;

pub use class::{ClassDeclaration, ClassEnd, CodeClass, CodeUsing};
pub use document::{ClassDocument, MemberDocument, MethodDocument, ModelDocument, NamespaceDocument};
pub use element::{CodeElement, CodeNamespace, ElementId, ElementKind};
pub use error::{IrError, Result};
pub use members::{CodeIndexer, CodeMethod, CodeParameter, CodeProperty, MethodKind};
pub use tree::CodeTree;
pub use types::{AccessModifier, CodeType, TypeSchema};
