//! TypeScript-specific naming conventions.

use arbor_codegen::NamingConvention;
use arbor_core::{to_first_lower, to_first_upper};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use a leading upper-case character
    to_type: to_first_upper,
    // Members use a leading lower-case character
    to_member: to_first_lower,
    // Contextual keywords such as `get` or `type` are valid member names
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
    ],
    escape_reserved: escape_ts_reserved,
};
