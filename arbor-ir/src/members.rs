//! Class members: properties, methods, parameters and indexers.

use serde::Deserialize;

use crate::{AccessModifier, CodeType, IrError, Result};

/// A property of a class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: CodeType,
    #[serde(default)]
    pub access: AccessModifier,
    #[serde(default)]
    pub read_only: bool,
    /// Literal initializer, emitted verbatim.
    #[serde(default)]
    pub default_value: Option<String>,
}

impl CodeProperty {
    /// Create a public, writable property without a default value.
    pub fn new(name: impl Into<String>, ty: CodeType) -> Self {
        Self {
            name: name.into(),
            ty,
            access: AccessModifier::Public,
            read_only: false,
            default_value: None,
        }
    }

    /// Set the access modifier.
    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Mark the property read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Set the literal default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The default value, treating an empty literal as absent.
    pub fn initializer(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Selects which body a backend renders for a method.
///
/// Unknown kinds read from a model document resolve to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
#[non_exhaustive]
pub enum MethodKind {
    /// Ordinary method; backends render their default body.
    #[default]
    Custom,
    /// Accessor synthesized from an indexer.
    IndexerBackwardCompatibility,
    /// Method that executes a request.
    RequestExecutor,
    /// Method that builds request information.
    RequestGenerator,
}

impl MethodKind {
    /// Get the snake_case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodKind::Custom => "custom",
            MethodKind::IndexerBackwardCompatibility => "indexer_backward_compatibility",
            MethodKind::RequestExecutor => "request_executor",
            MethodKind::RequestGenerator => "request_generator",
        }
    }
}

impl From<String> for MethodKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "indexer_backward_compatibility" => MethodKind::IndexerBackwardCompatibility,
            "request_executor" => MethodKind::RequestExecutor,
            "request_generator" => MethodKind::RequestGenerator,
            _ => MethodKind::Custom,
        }
    }
}

/// A parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: CodeType,
    #[serde(default)]
    pub optional: bool,
}

impl CodeParameter {
    /// Create a required parameter.
    pub fn new(name: impl Into<String>, ty: CodeType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Mark the parameter optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A method of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMethod {
    pub name: String,
    pub return_type: CodeType,
    parameters: Vec<CodeParameter>,
    pub access: AccessModifier,
    pub is_async: bool,
    pub kind: MethodKind,
}

impl CodeMethod {
    /// Create a public, synchronous custom method without parameters.
    pub fn new(name: impl Into<String>, return_type: CodeType) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            access: AccessModifier::Public,
            is_async: false,
            kind: MethodKind::Custom,
        }
    }

    /// Create a method taking exactly one parameter.
    pub fn with_parameter(
        name: impl Into<String>,
        return_type: CodeType,
        parameter: CodeParameter,
    ) -> Self {
        let mut method = Self::new(name, return_type);
        method.parameters.push(parameter);
        method
    }

    /// Set the access modifier.
    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Mark as async.
    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Set the method kind.
    pub fn kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::DuplicateParameter`] if a parameter with the same
    /// name already exists.
    pub fn add_parameter(&mut self, parameter: CodeParameter) -> Result<()> {
        if self.parameters.iter().any(|p| p.name == parameter.name) {
            return Err(IrError::DuplicateParameter {
                method: self.name.clone(),
                parameter: parameter.name,
            });
        }
        self.parameters.push(parameter);
        Ok(())
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[CodeParameter] {
        &self.parameters
    }
}

/// A fluent "address a sub-resource by key" accessor.
///
/// Indexers are lowered into methods at render time and never rendered
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeIndexer {
    pub name: String,
    /// Type of the addressed sub-resource builder.
    pub return_type: CodeType,
    /// Type of the index key.
    pub index_type: CodeType,
}

impl CodeIndexer {
    pub fn new(name: impl Into<String>, return_type: CodeType, index_type: CodeType) -> Self {
        Self {
            name: name.into(),
            return_type,
            index_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_initializer() {
        let plain = CodeProperty::new("pathSegment", CodeType::new("string"));
        assert_eq!(plain.initializer(), None);

        let empty = plain.clone().default_value("");
        assert_eq!(empty.initializer(), None);

        let zero = plain.default_value("0");
        assert_eq!(zero.initializer(), Some("0"));
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let mut method = CodeMethod::new("get", CodeType::new("User"));
        method
            .add_parameter(CodeParameter::new("id", CodeType::new("string")))
            .unwrap();

        let err = method
            .add_parameter(CodeParameter::new("id", CodeType::new("integer")))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::DuplicateParameter { ref method, ref parameter } if method == "get" && parameter == "id"
        ));
        assert_eq!(method.parameters().len(), 1);
    }

    #[test]
    fn test_method_kind_from_string() {
        assert_eq!(
            MethodKind::from("indexer_backward_compatibility".to_string()),
            MethodKind::IndexerBackwardCompatibility
        );
        assert_eq!(
            MethodKind::from("request_executor".to_string()),
            MethodKind::RequestExecutor
        );
        assert_eq!(MethodKind::from("serializer".to_string()), MethodKind::Custom);
    }

    #[test]
    fn test_method_builder() {
        let method = CodeMethod::new("get", CodeType::new("User"))
            .access(AccessModifier::Protected)
            .async_()
            .kind(MethodKind::RequestExecutor);
        assert_eq!(method.access, AccessModifier::Protected);
        assert!(method.is_async);
        assert_eq!(method.kind, MethodKind::RequestExecutor);
        assert!(method.parameters().is_empty());
    }
}
