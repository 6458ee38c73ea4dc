//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Element counts of a loaded model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModelStats {
    pub namespaces: usize,
    pub classes: usize,
    pub properties: usize,
    pub methods: usize,
    pub indexers: usize,
}

/// Report data from configuration and model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Configured backend identifier.
    pub language: String,
    /// Configured client namespace.
    pub namespace: String,
    /// Counts of the loaded model.
    pub stats: ModelStats,
    /// Error messages.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Language", &self.language);
        out.key_value("Namespace", &self.namespace);
        out.section("Model");
        out.list_item(&format!("{} namespaces", self.stats.namespaces));
        out.list_item(&format!("{} classes", self.stats.classes));
        out.list_item(&format!(
            "{} members ({} properties, {} methods, {} indexers)",
            self.stats.properties + self.stats.methods + self.stats.indexers,
            self.stats.properties,
            self.stats.methods,
            self.stats.indexers
        ));
    }
}
