//! Emitting rendered units to their destination.

mod sink;

pub use sink::{DirectorySink, MemorySink, OutputSink, WriteStats, write_units};
