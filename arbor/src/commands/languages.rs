use clap::Args;
use eyre::Result;

use crate::{
    language::registry,
    reports::{LanguagesReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self) -> Result<()> {
        let report = LanguagesReport {
            entries: registry().entries().to_vec(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
