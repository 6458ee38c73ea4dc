//! Check operation - validate the manifest against the backends and the model.

use arbor_codegen::{BackendOptions, BackendRegistry};
use arbor_manifest::ArborToml;

use super::model::{ensure_client_root, load_model, model_stats};
use crate::reports::{CheckReport, ModelStats};

/// Execute the check operation.
pub fn check(config: &ArborToml, registry: &BackendRegistry) -> CheckReport {
    let client = &config.manifest().client;
    let mut errors = Vec::new();

    let options = BackendOptions::new(config.base_dir().join(&client.output), &client.namespace);
    if let Err(e) = registry.create(&client.language, &options) {
        errors.push(e.to_string());
    }

    let stats = match load_model(&config.model_path()) {
        Ok(tree) => {
            if let Err(e) = ensure_client_root(&tree, &client.namespace) {
                errors.push(e.to_string());
            }
            model_stats(&tree)
        }
        Err(e) => {
            errors.push(format!("{e:#}"));
            ModelStats::default()
        }
    };

    CheckReport {
        config_path: config.path().to_path_buf(),
        language: client.language.clone(),
        namespace: client.namespace.clone(),
        stats,
        errors,
    }
}
