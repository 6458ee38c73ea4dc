//! Generate operation - render every unit of the model with one backend.

use std::path::{Path, PathBuf};

use arbor_codegen::{
    BackendOptions, BackendRegistry, DirectorySink, Emitter, LanguageWriter, MemorySink,
    RenderError, RenderedUnit, write_units,
};
use arbor_ir::CodeTree;
use arbor_manifest::ArborToml;
use eyre::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use super::model::{ensure_client_root, load_model};
use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Backend identifier overriding the manifest.
    pub language: Option<&'a str>,
    /// Output root overriding the manifest, relative to the working directory.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    config: &ArborToml,
    registry: &BackendRegistry,
    opts: GenerateOptions<'_>,
) -> Result<GenerateReport> {
    let client = &config.manifest().client;
    let language = opts.language.unwrap_or(&client.language);
    let output_root = match opts.output {
        Some(output) => output.to_path_buf(),
        None => config.base_dir().join(&client.output),
    };

    let tree = load_model(&config.model_path())?;
    ensure_client_root(&tree, &client.namespace)?;

    let backend = registry
        .create(
            language,
            &BackendOptions::new(output_root.clone(), &client.namespace),
        )
        .wrap_err("failed to select backend")?;
    let units = render_units(&tree, backend.as_ref())
        .wrap_err_with(|| format!("failed to render with the {} backend", backend.language()))?;

    let result = if opts.dry_run {
        let mut sink = MemorySink::new();
        write_units(&mut sink, &units)?;
        GenerationResult::Preview(
            units
                .into_iter()
                .map(|unit| PreviewFile {
                    path: unit.path.display().to_string(),
                    content: unit.content,
                })
                .collect(),
        )
    } else {
        let mut sink = DirectorySink::new(PathBuf::from("."));
        let stats = write_units(&mut sink, &units).wrap_err("failed to write generated files")?;
        info!(
            written = stats.written,
            unchanged = stats.unchanged,
            root = %output_root.display(),
            "generation finished"
        );
        GenerationResult::Written(stats)
    };

    Ok(GenerateReport {
        language: backend.language(),
        output_root,
        namespace_count: tree.namespaces().len(),
        class_count: tree.classes().len(),
        result,
    })
}

/// Render every unit in parallel, returning them in tree order.
pub fn render_units(
    tree: &CodeTree,
    backend: &dyn LanguageWriter,
) -> Result<Vec<RenderedUnit>, RenderError> {
    let emitter = Emitter::new(tree, backend);
    let rendered: Vec<Option<RenderedUnit>> = emitter
        .units()
        .par_iter()
        .map(|&unit| emitter.render(unit))
        .collect::<Result<_, _>>()?;
    Ok(rendered.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::language::registry;

    const MODEL: &str = r#"{
      "namespace": "graph",
      "classes": [{
        "name": "graphClient",
        "usings": [{ "namespace": "graph.users", "name": "usersRequestBuilder" }],
        "members": [
          { "kind": "property", "name": "pathSegment", "type": { "name": "string" }, "access": "protected", "default_value": "\"\"" }
        ]
      }],
      "namespaces": [{
        "name": "users",
        "classes": [{
          "name": "usersRequestBuilder",
          "members": [
            { "kind": "indexer", "name": "item", "return_type": { "name": "userItemRequestBuilder", "nullable": false }, "index_type": { "name": "string" } }
          ]
        }]
      }]
    }"#;

    fn project(language: &str, namespace: &str) -> (TempDir, ArborToml) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("model.json"), MODEL).unwrap();
        fs::write(
            temp.path().join("arbor.toml"),
            format!(
                "[client]\nlanguage = \"{language}\"\nnamespace = \"{namespace}\"\nmodel = \"model.json\"\noutput = \"generated\"\n"
            ),
        )
        .unwrap();
        let config = ArborToml::open(temp.path().join("arbor.toml")).unwrap();
        (temp, config)
    }

    fn options() -> GenerateOptions<'static> {
        GenerateOptions {
            language: None,
            output: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_generate_java_writes_files() {
        let (temp, config) = project("java", "graph");
        let report = generate(&config, &registry(), options()).unwrap();

        let GenerationResult::Written(stats) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(stats.written, 4);
        assert_eq!(report.class_count, 2);

        let builder = fs::read_to_string(
            temp.path()
                .join("generated/users/UsersRequestBuilder.java"),
        )
        .unwrap();
        assert!(builder.starts_with("package graph.users;\n"));
        assert!(builder.contains("public UserItemRequestBuilder get(@javax.annotation.Nonnull final String position) {"));
        assert!(temp.path().join("generated/package-info.java").exists());

        let again = generate(&config, &registry(), options()).unwrap();
        let GenerationResult::Written(stats) = again.result else {
            panic!("expected written result");
        };
        assert_eq!(stats.unchanged, 4);
    }

    #[test]
    fn test_dry_run_with_language_override() {
        let (temp, config) = project("java", "graph");
        let report = generate(
            &config,
            &registry(),
            GenerateOptions {
                language: Some("ts"),
                dry_run: true,
                ..options()
            },
        )
        .unwrap();

        assert_eq!(report.language, "typescript");
        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview");
        };
        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                temp.path().join("generated/index.ts").display().to_string(),
                temp.path().join("generated/users/index.ts").display().to_string(),
                temp.path().join("generated/graphClient.ts").display().to_string(),
                temp.path()
                    .join("generated/users/usersRequestBuilder.ts")
                    .display()
                    .to_string(),
            ]
        );
        assert!(!temp.path().join("generated").exists());
    }

    #[test]
    fn test_unknown_language() {
        let (_temp, config) = project("cobol", "graph");
        let err = generate(&config, &registry(), options()).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "failed to select backend: unknown language 'cobol', expected one of: java, typescript"
        );
    }

    #[test]
    fn test_namespace_mismatch() {
        let (_temp, config) = project("java", "contoso");
        let err = generate(&config, &registry(), options()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "model root namespace 'graph' does not match client namespace 'contoso'"
        );
    }
}
