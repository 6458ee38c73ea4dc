//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how model names become type, member and file names, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name to a type name (e.g., "usersRequestBuilder" -> "UsersRequestBuilder")
    pub to_type: fn(&str) -> String,
    /// Transform a model name to a method or field name
    pub to_member: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "default" -> "default_" in Java)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    /// Transform and make safe for use as a method, field or parameter name.
    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }
}

#[cfg(test)]
mod tests {
    use arbor_core::{to_first_lower, to_first_upper};

    use super::*;

    const SAMPLE: NamingConvention = NamingConvention {
        to_type: to_first_upper,
        to_member: to_first_lower,
        reserved_words: &["default", "class"],
        escape_reserved: escape,
    };

    fn escape(name: &str) -> String {
        format!("{name}_")
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        assert_eq!(SAMPLE.member_name("Default"), "default_");
        assert_eq!(SAMPLE.member_name("Get"), "get");
        assert_eq!(SAMPLE.type_name("item"), "Item");
    }
}
