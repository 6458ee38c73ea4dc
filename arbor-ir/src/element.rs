//! Arena elements.

use std::fmt;

use crate::{
    ClassDeclaration, ClassEnd, CodeClass, CodeIndexer, CodeMethod, CodeProperty,
};

/// Handle to an element of a [`CodeTree`](crate::CodeTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Position of the element in its tree.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A namespace: one segment of the logical client path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNamespace {
    /// This namespace's own segment.
    pub name: String,
    pub(crate) children: Vec<ElementId>,
}

impl CodeNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Child namespaces and classes in producer order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Payload of an element, discriminated by node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Namespace(CodeNamespace),
    Class(CodeClass),
    ClassDeclaration(ClassDeclaration),
    ClassEnd(ClassEnd),
    Property(CodeProperty),
    Method(CodeMethod),
    Indexer(CodeIndexer),
}

impl ElementKind {
    /// Human-readable kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ElementKind::Namespace(_) => "namespace",
            ElementKind::Class(_) => "class",
            ElementKind::ClassDeclaration(_) => "class declaration",
            ElementKind::ClassEnd(_) => "class end",
            ElementKind::Property(_) => "property",
            ElementKind::Method(_) => "method",
            ElementKind::Indexer(_) => "indexer",
        }
    }

    /// Whether this kind may appear among a class's members.
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            ElementKind::Property(_) | ElementKind::Method(_) | ElementKind::Indexer(_)
        )
    }

    fn name(&self) -> &str {
        match self {
            ElementKind::Namespace(ns) => &ns.name,
            ElementKind::Class(class) => &class.name,
            ElementKind::ClassDeclaration(decl) => &decl.name,
            ElementKind::ClassEnd(end) => &end.name,
            ElementKind::Property(prop) => &prop.name,
            ElementKind::Method(method) => &method.name,
            ElementKind::Indexer(indexer) => &indexer.name,
        }
    }
}

impl From<CodeProperty> for ElementKind {
    fn from(value: CodeProperty) -> Self {
        ElementKind::Property(value)
    }
}

impl From<CodeMethod> for ElementKind {
    fn from(value: CodeMethod) -> Self {
        ElementKind::Method(value)
    }
}

impl From<CodeIndexer> for ElementKind {
    fn from(value: CodeIndexer) -> Self {
        ElementKind::Indexer(value)
    }
}

/// An element of the code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeElement {
    pub(crate) parent: Option<ElementId>,
    pub(crate) kind: ElementKind,
}

impl CodeElement {
    /// Identifier of the element, before any casing is applied.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Owning element, if any. The root namespace has none.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }
}
