//! Lookup of language backends by identifier.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::{error::ConfigError, language::LanguageWriter};

/// Options every backend is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOptions {
    /// Output root that generated directories are placed under.
    pub root_path: PathBuf,
    /// Client root namespace, stripped from output paths.
    pub client_namespace: String,
}

impl BackendOptions {
    pub fn new(root_path: impl Into<PathBuf>, client_namespace: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            client_namespace: client_namespace.into(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.client_namespace.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        if self.root_path.as_os_str().is_empty() {
            return Err(ConfigError::UnusableOutputRoot {
                path: self.root_path.clone(),
                reason: "path is empty".to_string(),
            });
        }
        if self.root_path.is_file() {
            return Err(ConfigError::UnusableOutputRoot {
                path: self.root_path.clone(),
                reason: "path is an existing file".to_string(),
            });
        }
        Ok(())
    }
}

/// Constructor of a backend.
pub type BackendFactory = fn(&BackendOptions) -> Box<dyn LanguageWriter>;

/// A registered backend.
#[derive(Debug, Clone, Copy)]
pub struct BackendEntry {
    pub language: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    factory: BackendFactory,
}

impl BackendEntry {
    pub const fn new(
        language: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        factory: BackendFactory,
    ) -> Self {
        Self {
            language,
            aliases,
            description,
            factory,
        }
    }
}

/// Registry of backends keyed by language identifier and alias.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    entries: Vec<BackendEntry>,
    names: IndexMap<String, usize>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend. Registering an identifier again replaces the
    /// earlier backend.
    pub fn register(&mut self, entry: BackendEntry) -> &mut Self {
        let index = match self.entries.iter().position(|e| e.language == entry.language) {
            Some(index) => {
                self.entries[index] = entry;
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        for name in std::iter::once(entry.language).chain(entry.aliases.iter().copied()) {
            self.names.insert(name.to_lowercase(), index);
        }
        self
    }

    /// Resolve an identifier or alias, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&BackendEntry> {
        self.names
            .get(&name.to_lowercase())
            .map(|&index| &self.entries[index])
    }

    /// Registered backends in registration order.
    pub fn entries(&self) -> &[BackendEntry] {
        &self.entries
    }

    /// Identifiers of the registered backends.
    pub fn languages(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.language).collect()
    }

    /// Create the backend registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLanguage`] for an unregistered name and
    /// the option errors of [`ConfigError`] for unusable options.
    pub fn create(
        &self,
        name: &str,
        options: &BackendOptions,
    ) -> Result<Box<dyn LanguageWriter>, ConfigError> {
        let entry = self.get(name).ok_or_else(|| ConfigError::UnknownLanguage {
            name: name.to_string(),
            available: self.languages().into_iter().map(String::from).collect(),
        })?;
        options.validate()?;
        debug!(
            language = entry.language,
            root = %options.root_path.display(),
            namespace = %options.client_namespace,
            "creating backend"
        );
        Ok((entry.factory)(options))
    }
}
