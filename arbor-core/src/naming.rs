//! Identifier casing utilities.
//!
//! Everything here is a pure function over `&str` that leaves the remainder
//! of the identifier untouched.

/// Upper-case the first character (e.g., "itemRequestBuilder" -> "ItemRequestBuilder")
pub fn to_first_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "Get" -> "get")
pub fn to_first_lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_first_upper() {
        assert_eq!(to_first_upper("itemRequestBuilder"), "ItemRequestBuilder");
        assert_eq!(to_first_upper("Users"), "Users");
        assert_eq!(to_first_upper("a"), "A");
        assert_eq!(to_first_upper("hello_world"), "Hello_world");
        assert_eq!(to_first_upper(""), "");
    }

    #[test]
    fn test_to_first_lower() {
        assert_eq!(to_first_lower("Get"), "get");
        assert_eq!(to_first_lower("URLBuilder"), "uRLBuilder");
        assert_eq!(to_first_lower("get"), "get");
        assert_eq!(to_first_lower(""), "");
    }

    #[test]
    fn test_leading_helpers_are_inverse_on_first_char() {
        for s in ["users", "Users", "byId", "x"] {
            assert_eq!(to_first_lower(&to_first_upper(s)), to_first_lower(s));
        }
    }
}
