use std::path::PathBuf;

use arbor_manifest::ArborToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::registry,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to arbor.toml (defaults to ./arbor.toml)
    #[arg(short, long, default_value = "arbor.toml")]
    pub config: PathBuf,

    /// Output root (overrides arbor.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Target language (overrides arbor.toml setting)
    #[arg(short, long)]
    pub language: Option<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let arbor_toml = ArborToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &arbor_toml,
            &registry(),
            GenerateOptions {
                language: self.language.as_deref(),
                output: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
