//! Loading the code model.

use std::path::Path;

use arbor_ir::{CodeTree, ElementKind};
use eyre::{Context, Result, bail};

use crate::reports::ModelStats;

/// Read and build the model document at `path`.
pub fn load_model(path: &Path) -> Result<CodeTree> {
    let src = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read model '{}'", path.display()))?;
    CodeTree::from_json(&src).wrap_err_with(|| format!("invalid model '{}'", path.display()))
}

/// The model's root namespace must be the configured client namespace.
pub fn ensure_client_root(tree: &CodeTree, client_namespace: &str) -> Result<()> {
    let root = tree.namespace_path(tree.root()).unwrap_or_default();
    if root != client_namespace {
        bail!("model root namespace '{root}' does not match client namespace '{client_namespace}'");
    }
    Ok(())
}

/// Count the elements of a model.
pub fn model_stats(tree: &CodeTree) -> ModelStats {
    let mut stats = ModelStats {
        namespaces: tree.namespaces().len(),
        ..ModelStats::default()
    };
    for class in tree.classes() {
        stats.classes += 1;
        for element in tree.children(class).iter().filter_map(|&c| tree.get(c)) {
            match element.kind() {
                ElementKind::Property(_) => stats.properties += 1,
                ElementKind::Method(_) => stats.methods += 1,
                ElementKind::Indexer(_) => stats.indexers += 1,
                _ => {}
            }
        }
    }
    stats
}
