//! Java type translator implementation.

use arbor_codegen::TypeTranslator;

/// Java type translator implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeTranslator;

impl TypeTranslator for JavaTypeTranslator {
    fn map_primitive(&self, type_name: &str) -> Option<&'static str> {
        match type_name {
            "integer" => Some("Integer"),
            "number" => Some("Float"),
            "boolean" => Some("Boolean"),
            "string" => Some("String"),
            "object" => Some("Object"),
            _ => None,
        }
    }

    fn map_array(&self, inner: &str) -> String {
        format!("{inner}[]")
    }

    fn untyped_object(&self) -> &'static str {
        "Object"
    }
}
