//! TypeScript import statements.

use std::path::{Component, Path};

/// Builder for an ES module import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Render as a single statement.
    pub fn to_line(&self) -> String {
        format!(
            "import {{ {} }} from \"{}\";",
            self.named.join(", "),
            self.from
        )
    }
}

/// Module specifier of `file` in `to`, as seen from a module in `from`.
///
/// ```
/// use std::path::Path;
/// use arbor_codegen_typescript::relative_module;
///
/// assert_eq!(
///     relative_module(Path::new("out/users"), Path::new("out/users/item"), "itemRequestBuilder"),
///     "./item/itemRequestBuilder"
/// );
/// assert_eq!(
///     relative_module(Path::new("out/users/item"), Path::new("out"), "graphClient"),
///     "../../graphClient"
/// );
/// ```
pub fn relative_module(from: &Path, to: &Path, file: &str) -> String {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    if from.len() == common {
        parts.push(".".to_string());
    } else {
        parts.extend(std::iter::repeat_n("..".to_string(), from.len() - common));
    }
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.push(file.to_string());
    parts.join("/")
}

/// Module specifier of `file` in a namespace outside the client tree.
///
/// ```
/// use arbor_codegen_typescript::package_module;
///
/// assert_eq!(package_module("contoso.models", "widget"), "contoso/models/widget");
/// ```
pub fn package_module(namespace: &str, file: &str) -> String {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .chain(std::iter::once(file))
        .collect::<Vec<_>>()
        .join("/")
}
