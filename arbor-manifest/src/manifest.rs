//! Manifest types and parsing for arbor.toml files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, ParseContext, Result};

/// Root manifest for arbor.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Client generation settings
    pub client: ClientConfig,
}

/// The `[client]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Backend identifier (e.g., "java", "typescript")
    pub language: String,
    /// Client root namespace name
    pub namespace: String,
    /// Model document, relative to arbor.toml
    pub model: PathBuf,
    /// Root output path, relative to arbor.toml
    pub output: PathBuf,
}

impl Manifest {
    /// Parse an arbor.toml from a string (uses "arbor.toml" as default filename)
    pub fn parse_str(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "arbor.toml")
    }

    /// Parse an arbor.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(&ParseContext::new(content, filename))?;
        Ok(manifest)
    }

    /// Validate the manifest after parsing
    pub fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        let client = &self.client;
        ctx.require_non_empty("language", &client.language)?;
        ctx.validate_namespace(&client.namespace)?;
        ctx.require_non_empty("model", &client.model.to_string_lossy())?;
        ctx.require_non_empty("output", &client.output.to_string_lossy())?;
        Ok(())
    }
}
