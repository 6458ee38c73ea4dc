//! Generate command report data structures.

use std::path::PathBuf;

use arbor_codegen::WriteStats;

use super::output::{Output, Report};

/// Report data from client generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Backend identifier that rendered the units.
    pub language: &'static str,
    /// Root output path handed to the backend.
    pub output_root: PathBuf,
    /// Number of namespaces in the model.
    pub namespace_count: usize,
    /// Number of classes in the model.
    pub class_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of client generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WriteStats),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(stats) => self.render_written(out, stats),
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, stats: &WriteStats) {
        out.key_value("Language", self.language);
        out.key_value(
            "Model",
            &format!(
                "{} namespace{}, {} class{}",
                self.namespace_count,
                plural(self.namespace_count, "s"),
                self.class_count,
                plural(self.class_count, "es")
            ),
        );
        out.key_value("Generated", &self.output_root.display().to_string());
        if stats.total() == 0 {
            out.warning("the model produced no files");
            return;
        }
        out.list_item(&format!("{} written", stats.written));
        out.list_item(&format!("{} unchanged", stats.unchanged));
    }
}

fn plural(count: usize, suffix: &'static str) -> &'static str {
    if count == 1 { "" } else { suffix }
}
