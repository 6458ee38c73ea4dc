//! Namespace paths to output file locations.

use std::path::{Path, PathBuf};

/// Directory and file name chosen for one output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments {
    pub directory: PathBuf,
    pub file_name: String,
}

impl PathSegments {
    /// Full path of the unit.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Namespace path with the client root namespace stripped from the front.
///
/// Returns `None` for namespaces that do not lie under the client root.
///
/// ```
/// use arbor_codegen::language::relative_namespace;
///
/// assert_eq!(relative_namespace("graph.users.item", "graph"), Some("users.item"));
/// assert_eq!(relative_namespace("graph", "graph"), Some(""));
/// assert_eq!(relative_namespace("graphql.users", "graph"), None);
/// ```
pub fn relative_namespace<'a>(namespace: &'a str, client_namespace: &str) -> Option<&'a str> {
    if client_namespace.is_empty() {
        return Some(namespace);
    }
    if namespace == client_namespace {
        return Some("");
    }
    namespace
        .strip_prefix(client_namespace)
        .and_then(|rest| rest.strip_prefix('.'))
}

/// A namespace outside the client root has no output location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("namespace '{namespace}' is outside the client namespace '{client_namespace}'")]
pub struct ForeignNamespace {
    pub namespace: String,
    pub client_namespace: String,
}

/// Maps a namespace path plus element name to an output location.
///
/// Distinct namespace paths under the client root land in distinct
/// directories; every other namespace is rejected. Backends should keep
/// [`normalize_namespace_segment`](Self::normalize_namespace_segment)
/// injective; the defaults leave segments as they are.
pub trait PathSegmenter: Send + Sync {
    /// Output root every directory is placed under.
    fn root_path(&self) -> &Path;

    /// Client root namespace, stripped from the front of namespace paths.
    fn client_namespace(&self) -> &str;

    /// File suffix including the dot (e.g. ".java").
    fn file_suffix(&self) -> &'static str;

    /// Base name of the file rendered for a namespace itself.
    fn namespace_file_name(&self) -> &'static str;

    /// Directory name for one namespace segment.
    fn normalize_namespace_segment(&self, segment: &str) -> String {
        segment.to_string()
    }

    /// Base file name (without suffix) for a class.
    fn normalize_file_name(&self, element_name: &str) -> String;

    /// Directory holding the units of `namespace`.
    fn directory_for(&self, namespace: &str) -> Result<PathBuf, ForeignNamespace> {
        let relative = relative_namespace(namespace, self.client_namespace()).ok_or_else(|| {
            ForeignNamespace {
                namespace: namespace.to_string(),
                client_namespace: self.client_namespace().to_string(),
            }
        })?;
        let mut directory = self.root_path().to_path_buf();
        relative
            .split('.')
            .filter(|segment| !segment.is_empty())
            .for_each(|segment| directory.push(self.normalize_namespace_segment(segment)));
        Ok(directory)
    }

    /// Location of the unit rendered for the namespace itself.
    fn segments_for(&self, namespace: &str) -> Result<PathSegments, ForeignNamespace> {
        Ok(PathSegments {
            directory: self.directory_for(namespace)?,
            file_name: format!("{}{}", self.namespace_file_name(), self.file_suffix()),
        })
    }

    /// Location of the unit for `element_name` declared in `namespace`.
    fn path_for(&self, namespace: &str, element_name: &str) -> Result<PathBuf, ForeignNamespace> {
        let file_name = format!(
            "{}{}",
            self.normalize_file_name(element_name),
            self.file_suffix()
        );
        Ok(self.directory_for(namespace)?.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        root: PathBuf,
    }

    impl PathSegmenter for Plain {
        fn root_path(&self) -> &Path {
            &self.root
        }

        fn client_namespace(&self) -> &str {
            "graph"
        }

        fn file_suffix(&self) -> &'static str {
            ".txt"
        }

        fn namespace_file_name(&self) -> &'static str {
            "_ns"
        }

        fn normalize_file_name(&self, element_name: &str) -> String {
            element_name.to_lowercase()
        }
    }

    fn plain() -> Plain {
        Plain {
            root: PathBuf::from("out"),
        }
    }

    #[test]
    fn test_client_namespace_is_stripped() {
        let s = plain();
        assert_eq!(s.directory_for("graph").unwrap(), PathBuf::from("out"));
        assert_eq!(
            s.directory_for("graph.users.item").unwrap(),
            PathBuf::from("out/users/item")
        );
    }

    #[test]
    fn test_foreign_namespace_is_rejected() {
        let s = plain();
        let err = s.directory_for("graphql.users").unwrap_err();
        assert_eq!(
            err,
            ForeignNamespace {
                namespace: "graphql.users".into(),
                client_namespace: "graph".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "namespace 'graphql.users' is outside the client namespace 'graph'"
        );
        assert!(s.path_for("", "Orphan").is_err());
        assert!(s.segments_for("other").is_err());
    }

    #[test]
    fn test_nested_client_segment_does_not_alias_foreign_namespace() {
        let s = plain();
        assert_eq!(
            s.directory_for("graph.graph.item").unwrap(),
            PathBuf::from("out/graph/item")
        );
        assert!(s.directory_for("graph.item.graph").is_ok());
        assert!(s.directory_for("item").is_err());
    }

    #[test]
    fn test_unit_paths() {
        let s = plain();
        assert_eq!(
            s.path_for("graph.users", "UsersRequestBuilder").unwrap(),
            PathBuf::from("out/users/usersrequestbuilder.txt")
        );
        let segments = s.segments_for("graph.users").unwrap();
        assert_eq!(segments.file_name, "_ns.txt");
        assert_eq!(segments.path(), PathBuf::from("out/users/_ns.txt"));
    }
}
