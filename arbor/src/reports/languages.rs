//! Languages command report.

use arbor_codegen::BackendEntry;

use super::output::{Output, Report};

/// Registered backends.
#[derive(Debug)]
pub struct LanguagesReport {
    pub entries: Vec<BackendEntry>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Languages");
        for entry in &self.entries {
            let aliases = if entry.aliases.is_empty() {
                String::new()
            } else {
                format!(" (alias: {})", entry.aliases.join(", "))
            };
            out.list_item(&format!("{}{aliases}: {}", entry.language, entry.description));
        }
    }
}
