//! Operations behind the commands.
//!
//! Operations take parsed configuration and return report data; they never
//! print.

mod check;
mod generate;
mod model;

pub use check::check;
pub use generate::{GenerateOptions, generate};
