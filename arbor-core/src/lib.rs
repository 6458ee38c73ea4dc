//! Core utilities for the Arbor client generator.
//!
//! This crate provides the casing helpers and file primitives used across
//! the Arbor crates.

mod file;
mod naming;

// File operations
pub use file::{File, GeneratedFile, WriteResult};
// String utilities
pub use naming::{to_first_lower, to_first_upper};
