//! Validation utilities for manifest values

use miette::SourceSpan;

use crate::{Error, Result};

/// Validation context that carries source information.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Find the span of the value assigned to `key`.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_value_span(self.src, key)
    }

    /// Validate a dotted namespace name.
    pub fn validate_namespace(&self, name: &str) -> Result<()> {
        match validate_namespace(name) {
            Some(reason) => Err(Error::invalid_namespace(
                name,
                reason,
                self.src,
                self.filename,
                self.find_span("namespace"),
            )),
            None => Ok(()),
        }
    }

    /// Reject an empty value for `key`.
    pub fn require_non_empty(&self, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::validation(
                format!("'{key}' must not be empty"),
                self.src,
                self.filename,
                self.find_span(key),
            ));
        }
        Ok(())
    }
}

/// Find the span of the value in a `key = value` line.
///
/// Quoted values span their quotes. Returns `None` when the key is absent.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let trimmed = line.trim_start();
        let Some(rest) = trimmed.strip_prefix(key) else {
            continue;
        };
        let Some(after_eq) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value = after_eq.trim_start();
        let value_start = start + (line.len() - value.len());
        let len = match value.strip_prefix('"') {
            Some(quoted) => quoted.find('"').map_or(value.trim_end().len(), |end| end + 2),
            None => value.trim_end().len(),
        };
        return Some(SourceSpan::from((value_start, len)));
    }
    None
}

/// Validate a dotted namespace name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_namespace(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("namespace cannot be empty");
    }
    for segment in name.split('.') {
        if let Some(reason) = validate_segment(segment) {
            return Some(reason);
        }
    }
    None
}

fn validate_segment(segment: &str) -> Option<&'static str> {
    let mut chars = segment.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("segments must start with a letter or underscore"),
        None => return Some("segments cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("segments must contain only letters, numbers, and underscores");
    }

    None
}
