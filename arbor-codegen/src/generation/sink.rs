//! Destinations for rendered units.

use std::path::{Path, PathBuf};

use arbor_core::{GeneratedFile, WriteResult};
use eyre::{Result, bail};
use indexmap::{IndexMap, IndexSet};

use crate::writer::RenderedUnit;

/// Receives rendered units, one at a time.
pub trait OutputSink {
    fn write(&mut self, unit: &RenderedUnit) -> Result<WriteResult>;
}

/// Counts of what a sink did with a batch of units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub written: usize,
    pub unchanged: usize,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}

/// Hand `units` to `sink` in order.
///
/// # Errors
///
/// Fails before writing anything if two units share a path, and otherwise
/// stops at the first unit the sink cannot write.
pub fn write_units(sink: &mut dyn OutputSink, units: &[RenderedUnit]) -> Result<WriteStats> {
    let mut seen = IndexSet::new();
    for unit in units {
        if !seen.insert(unit.path.as_path()) {
            bail!("two units map to '{}'", unit.path.display());
        }
    }

    let mut stats = WriteStats::default();
    for unit in units {
        match sink.write(unit)? {
            WriteResult::Written => stats.written += 1,
            WriteResult::Unchanged => stats.unchanged += 1,
        }
    }
    Ok(stats)
}

/// Writes units to disk below a base directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    base: PathBuf,
}

impl DirectorySink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl OutputSink for DirectorySink {
    fn write(&mut self, unit: &RenderedUnit) -> Result<WriteResult> {
        GeneratedFile::write(unit, &self.base)
    }
}

/// Keeps units in memory, keyed by path. Used for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: IndexMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Paths in the order they were first written.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, unit: &RenderedUnit) -> Result<WriteResult> {
        match self.files.insert(unit.path.clone(), unit.content.clone()) {
            Some(previous) if previous == unit.content => Ok(WriteResult::Unchanged),
            _ => Ok(WriteResult::Written),
        }
    }
}
