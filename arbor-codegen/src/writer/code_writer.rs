//! Indentation-aware text writer shared by every backend.

use std::ops::{Deref, DerefMut};

use super::Indent;

/// Line-oriented writer that tracks the current indentation depth.
///
/// Depth changes go through [`CodeWriter::indented`], which hands out an
/// [`IndentGuard`]. Dropping the guard restores the previous depth, so a
/// scope opened while rendering a class body is always closed again.
///
/// # Example
///
/// ```
/// use arbor_codegen::writer::{CodeWriter, Indent};
///
/// let mut w = CodeWriter::new(Indent::JAVA);
/// w.line("public class Foo {");
/// {
///     let mut body = w.indented();
///     body.line("private String name;");
/// }
/// w.line("}");
///
/// assert_eq!(w.build(), "public class Foo {\n    private String name;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeWriter {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Write a line at the current depth. Empty lines carry no indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Open one indentation level until the returned guard is dropped.
    pub fn indented(&mut self) -> IndentGuard<'_> {
        self.depth += 1;
        IndentGuard { writer: self }
    }

    /// Write `header`, run `f` one level deeper, then write `close`.
    pub fn block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut CodeWriter),
    {
        self.line(header);
        {
            let mut body = self.indented();
            f(&mut body);
        }
        self.line(close)
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let unit = self.indent.as_str();
        for _ in 0..self.depth {
            self.buffer.push_str(unit);
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

/// Scope guard returned by [`CodeWriter::indented`].
///
/// Dereferences to the underlying writer and decrements its depth on drop.
#[derive(Debug)]
pub struct IndentGuard<'a> {
    writer: &'a mut CodeWriter,
}

impl Deref for IndentGuard<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.writer.depth = self.writer.depth.saturating_sub(1);
    }
}
