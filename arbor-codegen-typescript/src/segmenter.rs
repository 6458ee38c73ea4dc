//! TypeScript output layout: one directory per namespace segment.

use std::path::{Path, PathBuf};

use arbor_codegen::{BackendOptions, PathSegmenter};
use arbor_core::to_first_lower;

/// Base name of the barrel module of a namespace.
const BARREL: &str = "index";

/// Places each class in `<root>/<namespace dirs>/<className>.ts`.
#[derive(Debug, Clone)]
pub struct TypeScriptPathSegmenter {
    root_path: PathBuf,
    client_namespace: String,
}

impl TypeScriptPathSegmenter {
    pub fn new(root_path: impl Into<PathBuf>, client_namespace: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            client_namespace: client_namespace.into(),
        }
    }

    pub fn from_options(options: &BackendOptions) -> Self {
        Self::new(&options.root_path, &options.client_namespace)
    }
}

impl PathSegmenter for TypeScriptPathSegmenter {
    fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn client_namespace(&self) -> &str {
        &self.client_namespace
    }

    fn file_suffix(&self) -> &'static str {
        ".ts"
    }

    fn namespace_file_name(&self) -> &'static str {
        BARREL
    }

    // `index` followed by any run of `_` gains one more `_`, so no class
    // file is named like the barrel and escaped names stay distinct
    fn normalize_file_name(&self, element_name: &str) -> String {
        let name = to_first_lower(element_name);
        if name.trim_end_matches('_') == BARREL {
            format!("{name}_")
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn segmenter() -> TypeScriptPathSegmenter {
        TypeScriptPathSegmenter::new("src", "graph")
    }

    #[test]
    fn test_class_paths() {
        let s = segmenter();
        assert_eq!(
            s.path_for("graph.users.item", "ItemRequestBuilder").unwrap(),
            PathBuf::from("src/users/item/itemRequestBuilder.ts")
        );
        assert_eq!(
            s.path_for("graph", "Index").unwrap(),
            PathBuf::from("src/index_.ts")
        );
    }

    #[test]
    fn test_escaped_index_names_stay_distinct() {
        let s = segmenter();
        let paths: HashSet<_> = ["Index", "index_", "index__", "indexer", "Index_x"]
            .iter()
            .map(|name| s.path_for("graph", name).unwrap())
            .collect();
        assert_eq!(paths.len(), 5);
        assert!(paths.contains(&PathBuf::from("src/index__.ts")));
        assert!(paths.contains(&PathBuf::from("src/index___.ts")));
        assert!(paths.contains(&PathBuf::from("src/indexer.ts")));
        assert!(!paths.contains(&PathBuf::from("src/index.ts")));
    }

    #[test]
    fn test_barrel() {
        let segments = segmenter().segments_for("graph.users").unwrap();
        assert_eq!(segments.path(), PathBuf::from("src/users/index.ts"));
    }

    #[test]
    fn test_distinct_namespaces_get_distinct_directories() {
        let s = segmenter();
        let directories: HashSet<_> = (0..50)
            .map(|i| match i % 2 {
                0 => format!("graph.a.n{i}"),
                _ => format!("graph.A.n{i}"),
            })
            .map(|ns| s.directory_for(&ns).unwrap())
            .collect();
        assert_eq!(directories.len(), 50);
    }
}
