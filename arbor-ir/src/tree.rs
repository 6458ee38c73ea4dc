//! The code tree arena and its producer API.

use crate::{
    ClassDeclaration, ClassEnd, CodeClass, CodeElement, CodeNamespace, CodeUsing, ElementId,
    ElementKind, IrError, Result,
};

/// An arena-backed tree of code elements.
///
/// The root namespace is always element `#0`. Producers populate the tree
/// through the `add_*` methods, which maintain the structural invariants
/// (unique sibling namespaces, declaration first and end last in every
/// class). [`CodeTree::push_element`] skips those checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    elements: Vec<CodeElement>,
}

impl CodeTree {
    /// Create a tree with a root namespace named `root_namespace`.
    pub fn new(root_namespace: impl Into<String>) -> Self {
        Self {
            elements: vec![CodeElement {
                parent: None,
                kind: ElementKind::Namespace(CodeNamespace::new(root_namespace)),
            }],
        }
    }

    /// The root namespace.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the tree only holds its root namespace.
    pub fn is_empty(&self) -> bool {
        self.elements.len() <= 1
    }

    pub fn get(&self, id: ElementId) -> Option<&CodeElement> {
        self.elements.get(id.0)
    }

    /// Get an element, failing with [`IrError::UnknownElement`].
    pub fn element(&self, id: ElementId) -> Result<&CodeElement> {
        self.get(id).ok_or(IrError::UnknownElement(id))
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(CodeElement::parent)
    }

    /// Children of a namespace or class; empty for every other kind.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        match self.get(id).map(CodeElement::kind) {
            Some(ElementKind::Namespace(ns)) => ns.children(),
            Some(ElementKind::Class(class)) => class.children(),
            _ => &[],
        }
    }

    pub fn namespace(&self, id: ElementId) -> Option<&CodeNamespace> {
        match self.get(id).map(CodeElement::kind) {
            Some(ElementKind::Namespace(ns)) => Some(ns),
            _ => None,
        }
    }

    pub fn class(&self, id: ElementId) -> Option<&CodeClass> {
        match self.get(id).map(CodeElement::kind) {
            Some(ElementKind::Class(class)) => Some(class),
            _ => None,
        }
    }

    /// Logical path of a namespace: ancestor segments joined with `.`.
    ///
    /// Returns `None` when `id` is not a namespace.
    pub fn namespace_path(&self, id: ElementId) -> Option<String> {
        self.namespace(id)?;
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(ns) = current.and_then(|c| self.namespace(c)) {
            if !ns.name.is_empty() {
                segments.push(ns.name.as_str());
            }
            current = current.and_then(|c| self.parent(c));
        }
        segments.reverse();
        Some(segments.join("."))
    }

    /// Namespace owning a class-body element: the parent's parent, when that is a namespace.
    pub fn enclosing_namespace(&self, id: ElementId) -> Option<ElementId> {
        let grandparent = self.parent(self.parent(id)?)?;
        self.namespace(grandparent).map(|_| grandparent)
    }

    /// The declaration node of a class, if present.
    pub fn declaration(&self, class: ElementId) -> Option<(ElementId, &ClassDeclaration)> {
        self.children(class)
            .iter()
            .find_map(|&child| match self.get(child).map(CodeElement::kind) {
                Some(ElementKind::ClassDeclaration(decl)) => Some((child, decl)),
                _ => None,
            })
    }

    /// Find a namespace by its logical path.
    pub fn find_namespace(&self, path: &str) -> Option<ElementId> {
        self.namespaces()
            .into_iter()
            .find(|&id| self.namespace_path(id).as_deref() == Some(path))
    }

    /// All namespaces, depth-first in producer order, root first.
    pub fn namespaces(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.walk_namespaces(self.root(), &mut out);
        out
    }

    /// All classes, depth-first in producer order.
    pub fn classes(&self) -> Vec<ElementId> {
        self.namespaces()
            .into_iter()
            .flat_map(|ns| self.children(ns).iter().copied())
            .filter(|&child| self.class(child).is_some())
            .collect()
    }

    fn walk_namespaces(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        for &child in self.children(id) {
            if self.namespace(child).is_some() {
                self.walk_namespaces(child, out);
            }
        }
    }

    // =========================================================================
    // Producer API
    // =========================================================================

    /// Add a child namespace.
    ///
    /// # Errors
    ///
    /// Fails if `parent` is not a namespace, if `segment` is empty or holds a
    /// `.` or path separator, or if `parent` already has a child namespace
    /// with the same segment.
    pub fn add_namespace(
        &mut self,
        parent: ElementId,
        segment: impl Into<String>,
    ) -> Result<ElementId> {
        let segment = segment.into();
        self.expect_namespace(parent)?;
        if let Some(reason) = invalid_segment(&segment) {
            return Err(IrError::InvalidNamespaceSegment {
                parent: self.namespace_path(parent).unwrap_or_default(),
                segment,
                reason,
            });
        }
        if self
            .children(parent)
            .iter()
            .any(|&c| self.namespace(c).is_some_and(|ns| ns.name == segment))
        {
            return Err(IrError::DuplicateNamespace {
                parent: self.namespace_path(parent).unwrap_or_default(),
                segment,
            });
        }
        self.push_element(
            Some(parent),
            ElementKind::Namespace(CodeNamespace::new(segment)),
        )
    }

    /// Add a class with its declaration and end nodes.
    pub fn add_class(&mut self, namespace: ElementId, name: impl Into<String>) -> Result<ElementId> {
        let name = name.into();
        self.expect_namespace(namespace)?;
        let class = self.push_element(Some(namespace), ElementKind::Class(CodeClass::new(&name)))?;
        self.push_element(
            Some(class),
            ElementKind::ClassDeclaration(ClassDeclaration::new(&name)),
        )?;
        self.push_element(Some(class), ElementKind::ClassEnd(ClassEnd { name }))?;
        Ok(class)
    }

    /// Record a using on a class's declaration.
    pub fn add_using(&mut self, class: ElementId, using: CodeUsing) -> Result<()> {
        let declaration = self
            .declaration(class)
            .map(|(id, _)| id)
            .ok_or_else(|| self.unexpected(class, "class with a declaration"))?;
        if let ElementKind::ClassDeclaration(decl) = &mut self.elements[declaration.0].kind {
            decl.push_using(using);
        }
        Ok(())
    }

    /// Add a property, method or indexer, keeping the class end last.
    pub fn add_member(&mut self, class: ElementId, member: impl Into<ElementKind>) -> Result<ElementId> {
        let member = member.into();
        if !member.is_member() {
            return Err(IrError::UnexpectedKind {
                name: member.kind_name().to_string(),
                expected: "class member",
                found: member.kind_name(),
            });
        }
        let end_position = {
            let class_node = self.class(class).ok_or_else(|| self.unexpected(class, "class"))?;
            class_node.children().iter().position(|&c| {
                matches!(
                    self.get(c).map(CodeElement::kind),
                    Some(ElementKind::ClassEnd(_))
                )
            })
        };

        let id = ElementId(self.elements.len());
        self.elements.push(CodeElement {
            parent: Some(class),
            kind: member,
        });
        if let ElementKind::Class(class_node) = &mut self.elements[class.0].kind {
            match end_position {
                Some(pos) => class_node.children.insert(pos, id),
                None => class_node.children.push(id),
            }
        }
        Ok(id)
    }

    /// Append an element under `parent` without enforcing structural invariants.
    ///
    /// The element is added to the parent's children when the parent is a
    /// namespace or class; for other parents only the back-link is set.
    pub fn push_element(&mut self, parent: Option<ElementId>, kind: ElementKind) -> Result<ElementId> {
        if let Some(parent) = parent {
            self.element(parent)?;
        }
        let id = ElementId(self.elements.len());
        self.elements.push(CodeElement { parent, kind });
        if let Some(parent) = parent {
            match &mut self.elements[parent.0].kind {
                ElementKind::Namespace(ns) => ns.children.push(id),
                ElementKind::Class(class) => class.children.push(id),
                _ => {}
            }
        }
        Ok(id)
    }

    fn expect_namespace(&self, id: ElementId) -> Result<()> {
        match self.namespace(id) {
            Some(_) => Ok(()),
            None => Err(self.unexpected(id, "namespace")),
        }
    }

    fn unexpected(&self, id: ElementId, expected: &'static str) -> IrError {
        match self.get(id) {
            Some(element) => IrError::UnexpectedKind {
                name: element.name().to_string(),
                expected,
                found: element.kind().kind_name(),
            },
            None => IrError::UnknownElement(id),
        }
    }
}

/// Why `segment` cannot name a child namespace, if it cannot.
fn invalid_segment(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        Some("segments must not be empty")
    } else if segment.contains('.') {
        Some("segments must not contain '.'")
    } else if segment.contains(['/', '\\']) {
        Some("segments must not contain path separators")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodeIndexer, CodeProperty, CodeType};

    fn sample_tree() -> (CodeTree, ElementId, ElementId) {
        let mut tree = CodeTree::new("graph");
        let users = tree.add_namespace(tree.root(), "users").unwrap();
        let item = tree.add_namespace(users, "item").unwrap();
        (tree, users, item)
    }

    #[test]
    fn test_namespace_path_concatenates_ancestors() {
        let (tree, users, item) = sample_tree();
        assert_eq!(tree.namespace_path(tree.root()).unwrap(), "graph");
        assert_eq!(tree.namespace_path(users).unwrap(), "graph.users");
        assert_eq!(tree.namespace_path(item).unwrap(), "graph.users.item");
        assert_eq!(tree.find_namespace("graph.users.item"), Some(item));
    }

    #[test]
    fn test_duplicate_namespace_rejected() {
        let (mut tree, _, _) = sample_tree();
        let err = tree.add_namespace(tree.root(), "users").unwrap_err();
        assert!(matches!(err, IrError::DuplicateNamespace { .. }));
    }

    #[test]
    fn test_empty_segment_rejected() {
        let (mut tree, users, _) = sample_tree();
        let err = tree.add_namespace(users, "").unwrap_err();
        assert!(matches!(err, IrError::InvalidNamespaceSegment { .. }));
        assert_eq!(
            err.to_string(),
            "namespace 'graph.users' cannot contain a namespace named '': segments must not be empty"
        );
        assert_eq!(tree.namespaces().len(), 3);
    }

    #[test]
    fn test_dotted_segment_cannot_alias_nested_path() {
        let (mut tree, _, item) = sample_tree();
        assert_eq!(tree.namespace_path(item).unwrap(), "graph.users.item");

        let err = tree.add_namespace(tree.root(), "users.item").unwrap_err();
        assert_eq!(
            err.to_string(),
            "namespace 'graph' cannot contain a namespace named 'users.item': segments must not contain '.'"
        );
        assert!(matches!(
            tree.add_namespace(tree.root(), "users/item"),
            Err(IrError::InvalidNamespaceSegment { .. })
        ));
    }

    #[test]
    fn test_class_brackets_members() {
        let (mut tree, users, _) = sample_tree();
        let class = tree.add_class(users, "UsersRequestBuilder").unwrap();
        tree.add_member(
            class,
            CodeProperty::new("pathSegment", CodeType::new("string")),
        )
        .unwrap();
        tree.add_member(
            class,
            CodeIndexer::new(
                "item",
                CodeType::new("ItemRequestBuilder"),
                CodeType::new("string"),
            ),
        )
        .unwrap();

        let kinds: Vec<_> = tree
            .children(class)
            .iter()
            .map(|&c| tree.get(c).unwrap().kind().kind_name())
            .collect();
        assert_eq!(
            kinds,
            vec!["class declaration", "property", "indexer", "class end"]
        );
    }

    #[test]
    fn test_enclosing_namespace_skips_class_node() {
        let (mut tree, users, _) = sample_tree();
        let class = tree.add_class(users, "UsersRequestBuilder").unwrap();
        let (decl, _) = tree.declaration(class).unwrap();
        assert_eq!(tree.enclosing_namespace(decl), Some(users));
        assert_eq!(tree.enclosing_namespace(class), None);
    }

    #[test]
    fn test_add_using_records_on_declaration() {
        let (mut tree, users, _) = sample_tree();
        let class = tree.add_class(users, "UsersRequestBuilder").unwrap();
        tree.add_using(class, CodeUsing::new("graph.users.item", "ItemRequestBuilder"))
            .unwrap();
        let (_, decl) = tree.declaration(class).unwrap();
        assert_eq!(decl.usings().len(), 1);
    }

    #[test]
    fn test_add_member_rejects_non_members_and_non_classes() {
        let (mut tree, users, _) = sample_tree();
        let prop = CodeProperty::new("x", CodeType::new("string"));
        let err = tree.add_member(users, prop).unwrap_err();
        assert!(matches!(err, IrError::UnexpectedKind { expected: "class", .. }));

        let err = tree
            .add_member(users, ElementKind::ClassEnd(ClassEnd { name: "x".into() }))
            .unwrap_err();
        assert!(matches!(err, IrError::UnexpectedKind { expected: "class member", .. }));
    }

    #[test]
    fn test_classes_are_listed_depth_first() {
        let (mut tree, users, item) = sample_tree();
        let root_class = tree.add_class(tree.root(), "GraphClient").unwrap();
        let users_class = tree.add_class(users, "UsersRequestBuilder").unwrap();
        let item_class = tree.add_class(item, "ItemRequestBuilder").unwrap();
        assert_eq!(tree.classes(), vec![root_class, users_class, item_class]);
        assert_eq!(tree.namespaces(), vec![tree.root(), users, item]);
    }

    #[test]
    fn test_unknown_element() {
        let tree = CodeTree::new("graph");
        let missing = ElementId(42);
        assert!(tree.get(missing).is_none());
        assert!(matches!(
            tree.element(missing),
            Err(IrError::UnknownElement(id)) if id == missing
        ));
    }
}
