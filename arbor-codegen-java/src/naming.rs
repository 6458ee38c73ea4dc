//! Java-specific naming conventions.

use arbor_codegen::NamingConvention;
use arbor_core::{to_first_lower, to_first_upper};

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    // Types use a leading upper-case character
    to_type: to_first_upper,
    // Methods use a leading lower-case character
    to_member: to_first_lower,
    reserved_words: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "false",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "true",
        "try",
        "void",
        "volatile",
        "while",
    ],
    escape_reserved: escape_java_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_names() {
        assert_eq!(JAVA_NAMING.member_name("Get"), "get");
        assert_eq!(JAVA_NAMING.member_name("byId"), "byId");
        assert_eq!(JAVA_NAMING.member_name("Default"), "default_");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(JAVA_NAMING.type_name("itemRequestBuilder"), "ItemRequestBuilder");
        assert_eq!(JAVA_NAMING.type_name("User"), "User");
    }
}
