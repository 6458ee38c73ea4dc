use std::path::PathBuf;

use arbor_manifest::ArborToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::registry,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to arbor.toml (defaults to ./arbor.toml)
    #[arg(short, long, default_value = "arbor.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let arbor_toml = ArborToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&arbor_toml, &registry());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
