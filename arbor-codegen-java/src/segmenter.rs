//! Java output layout: one directory per package segment.

use std::path::{Path, PathBuf};

use arbor_codegen::{BackendOptions, PathSegmenter};
use arbor_core::to_first_upper;

/// Places each class in `<root>/<package dirs>/<ClassName>.java`.
///
/// Package segments are used as directory names verbatim, so distinct
/// packages never share a directory. Packages outside the client namespace
/// have no location.
#[derive(Debug, Clone)]
pub struct JavaPathSegmenter {
    root_path: PathBuf,
    client_namespace: String,
}

impl JavaPathSegmenter {
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

impl PathSegmenter for JavaPathSegmenter {
    fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn client_namespace(&self) -> &str {
        &self.client_namespace
    }

    fn file_suffix(&self) -> &'static str {
        ".java"
    }

    fn namespace_file_name(&self) -> &'static str {
        "package-info"
    }

    // File name must match the public class name
    fn normalize_file_name(&self, element_name: &str) -> String {
        to_first_upper(element_name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn segmenter() -> JavaPathSegmenter {
        JavaPathSegmenter::new("src/main/java", "graph")
    }

    #[test]
    fn test_class_paths() {
        let s = segmenter();
        assert_eq!(
            s.path_for("graph.users.item", "itemRequestBuilder").unwrap(),
            PathBuf::from("src/main/java/users/item/ItemRequestBuilder.java")
        );
        assert_eq!(
            s.path_for("graph", "graphClient").unwrap(),
            PathBuf::from("src/main/java/GraphClient.java")
        );
    }

    #[test]
    fn test_package_info() {
        let segments = segmenter().segments_for("graph.users").unwrap();
        assert_eq!(segments.directory, PathBuf::from("src/main/java/users"));
        assert_eq!(segments.file_name, "package-info.java");
    }

    #[test]
    fn test_distinct_namespaces_get_distinct_directories() {
        let s = segmenter();
        let namespaces: Vec<String> = (0..50)
            .map(|i| match i % 5 {
                0 => format!("graph.ns{i}"),
                1 => format!("graph.Ns{i}"),
                2 => format!("graph.users.ns_{i}"),
                3 => format!("graph.users.ns{i}.item"),
                _ => format!("graph.graph.ns{i}"),
            })
            .collect();
        assert_eq!(namespaces.iter().collect::<HashSet<_>>().len(), 50);

        let directories: HashSet<_> = namespaces
            .iter()
            .map(|ns| s.directory_for(ns).unwrap())
            .collect();
        assert_eq!(directories.len(), 50);
    }

    #[test]
    fn test_package_repeating_client_prefix_keeps_its_own_directory() {
        let s = JavaPathSegmenter::new("out", "graph.users");
        let nested = s.segments_for("graph.users.graph.item").unwrap();
        assert_eq!(nested.directory, PathBuf::from("out/graph/item"));

        let err = s.segments_for("graph.item").unwrap_err();
        assert_eq!(err.namespace, "graph.item");
        assert_eq!(err.client_namespace, "graph.users");
    }

    #[test]
    fn test_case_variants_stay_apart() {
        let s = segmenter();
        assert_ne!(s.directory_for("graph.Users"), s.directory_for("graph.users"));
    }
}
