//! Type references and access modifiers.

use std::fmt;

use serde::Deserialize;

/// Structural payload of a type reference.
///
/// Only the parts needed for type translation are modelled: the schema's own
/// type name and, for arrays, the item schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TypeSchema {
    /// Schema type name (e.g., "string", "array", or a custom type).
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Item schema for arrays.
    #[serde(default)]
    pub items: Option<Box<TypeSchema>>,
}

impl TypeSchema {
    /// Create a schema with the given type name and no items.
    pub fn of(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            items: None,
        }
    }

    /// Create an `array` schema whose items follow `items`.
    pub fn array_of(items: TypeSchema) -> Self {
        Self {
            type_name: Some("array".to_string()),
            items: Some(Box::new(items)),
        }
    }

    /// The schema's type name, treating an empty string as absent.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref().filter(|name| !name.is_empty())
    }

    /// The item schema, if any.
    pub fn items(&self) -> Option<&TypeSchema> {
        self.items.as_deref()
    }
}

/// A reference to a type from a member, parameter or return position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeType {
    /// Abstract type name ("integer", "string", "array", or a custom name).
    #[serde(default)]
    pub name: String,
    /// Structural schema for composite types.
    #[serde(default)]
    pub schema: Option<TypeSchema>,
    /// Whether the value may be absent.
    #[serde(rename = "nullable", default = "default_nullable")]
    pub is_nullable: bool,
    /// Whether the type denotes a callback consuming the named type.
    #[serde(default)]
    pub action_of: bool,
}

fn default_nullable() -> bool {
    true
}

impl CodeType {
    /// Create a nullable reference to the named type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            is_nullable: true,
            action_of: false,
        }
    }

    /// Create an `array` reference with the given item schema.
    pub fn array_of(items: TypeSchema) -> Self {
        Self::new("array").with_schema(TypeSchema::array_of(items))
    }

    /// Attach a structural schema.
    pub fn with_schema(mut self, schema: TypeSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Mark the type as non-nullable.
    pub fn non_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Mark the type as a callback/consumer of itself.
    pub fn action(mut self) -> Self {
        self.action_of = true;
        self
    }
}

/// Access level of a member.
///
/// Unrecognized values read from a model document resolve to `Private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
#[non_exhaustive]
pub enum AccessModifier {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessModifier {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            AccessModifier::Private => "private",
        }
    }
}

impl From<&str> for AccessModifier {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "public" => AccessModifier::Public,
            "protected" => AccessModifier::Protected,
            _ => AccessModifier::Private,
        }
    }
}

impl From<String> for AccessModifier {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
