//! Class bodies and their bracketing nodes.

use indexmap::IndexSet;
use serde::Deserialize;

use crate::ElementId;

/// An import of a declaration from another namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CodeUsing {
    /// Namespace the declaration lives in.
    pub namespace: String,
    /// Name of the imported declaration.
    pub name: String,
}

impl CodeUsing {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// The class-body grouping node.
///
/// Children are ordered: the [`ClassDeclaration`], the members, then the
/// [`ClassEnd`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeClass {
    pub name: String,
    pub(crate) children: Vec<ElementId>,
}

impl CodeClass {
    /// Create a detached class payload for [`CodeTree::push_element`](crate::CodeTree::push_element).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Child elements in producer order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Opening node of a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    usings: Vec<CodeUsing>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usings: Vec::new(),
        }
    }

    pub(crate) fn push_using(&mut self, using: CodeUsing) {
        self.usings.push(using);
    }

    /// Usings in insertion order, including duplicates.
    pub fn usings(&self) -> &[CodeUsing] {
        &self.usings
    }

    /// Usings deduplicated by `(namespace, name)`, first occurrence wins.
    pub fn distinct_usings(&self) -> Vec<&CodeUsing> {
        self.usings
            .iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Closing node of a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEnd {
    pub name: String,
}
