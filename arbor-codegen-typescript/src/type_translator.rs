//! TypeScript type translator implementation.

use arbor_codegen::TypeTranslator;

/// TypeScript type translator implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeTranslator;

impl TypeTranslator for TypeScriptTypeTranslator {
    fn map_primitive(&self, type_name: &str) -> Option<&'static str> {
        match type_name {
            "integer" => Some("number"),
            "number" => Some("number"),
            "boolean" => Some("boolean"),
            "string" => Some("string"),
            "object" => Some("object"),
            _ => None,
        }
    }

    fn map_array(&self, inner: &str) -> String {
        format!("{inner}[]")
    }

    fn untyped_object(&self) -> &'static str {
        "object"
    }
}

#[cfg(test)]
mod tests {
    use arbor_ir::TypeSchema;

    use super::*;

    #[test]
    fn test_typescript_primitives() {
        let t = TypeScriptTypeTranslator;

        assert_eq!(t.translate("integer", None), "number");
        assert_eq!(t.translate("number", None), "number");
        assert_eq!(t.translate("boolean", None), "boolean");
        assert_eq!(t.translate("string", None), "string");
        assert_eq!(t.translate("", None), "object");
        assert_eq!(t.translate("User", None), "User");
    }

    #[test]
    fn test_typescript_arrays() {
        let t = TypeScriptTypeTranslator;

        let matrix = TypeSchema::array_of(TypeSchema::array_of(TypeSchema::of("string")));
        assert_eq!(t.translate("array", Some(&matrix)), "string[][]");
        assert_eq!(t.translate("array", None), "object[]");
    }
}
