use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Represents an arbor.toml file with both raw content and parsed manifest.
#[derive(Debug, Clone)]
pub struct ArborToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ArborToml {
    /// Open and parse an arbor.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the file; relative paths in the manifest start here.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Model document path resolved against [`base_dir`](Self::base_dir).
    pub fn model_path(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.client.model)
    }
}
