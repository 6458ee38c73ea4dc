//! Tree walk that drives a [`LanguageWriter`] over one output unit.

use std::path::PathBuf;

use arbor_core::GeneratedFile;
use arbor_ir::{ClassEnd, CodeTree, ElementId, ElementKind};
use tracing::{debug, warn};

use super::CodeWriter;
use crate::{
    error::RenderError,
    language::{DeclarationContext, LanguageWriter, NamespaceContext},
};

/// What an output unit was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Class,
    Namespace,
}

/// Rendered text of one output unit and its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    pub path: PathBuf,
    pub content: String,
    pub kind: UnitKind,
}

impl GeneratedFile for RenderedUnit {
    fn path(&self, base: &std::path::Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// A unit the emitter can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRef {
    pub element: ElementId,
    pub kind: UnitKind,
}

/// Renders units of a read-only tree with one backend.
///
/// Rendering the same unit twice yields identical text. The emitter holds no
/// mutable state, so units may be rendered from several threads at once.
pub struct Emitter<'a> {
    tree: &'a CodeTree,
    backend: &'a dyn LanguageWriter,
}

impl<'a> Emitter<'a> {
    pub fn new(tree: &'a CodeTree, backend: &'a dyn LanguageWriter) -> Self {
        Self { tree, backend }
    }

    /// Every renderable unit: namespaces in preorder, then classes.
    pub fn units(&self) -> Vec<UnitRef> {
        let namespaces = self.tree.namespaces().into_iter().map(|element| UnitRef {
            element,
            kind: UnitKind::Namespace,
        });
        let classes = self.tree.classes().into_iter().map(|element| UnitRef {
            element,
            kind: UnitKind::Class,
        });
        namespaces.chain(classes).collect()
    }

    /// Render one unit. Namespaces without a unit of their own yield `None`.
    pub fn render(&self, unit: UnitRef) -> Result<Option<RenderedUnit>, RenderError> {
        match unit.kind {
            UnitKind::Class => self.render_class(unit.element).map(Some),
            UnitKind::Namespace => self.render_namespace(unit.element),
        }
    }

    /// Render every unit sequentially, in [`units`](Self::units) order.
    pub fn render_all(&self) -> Result<Vec<RenderedUnit>, RenderError> {
        let mut rendered = Vec::new();
        for unit in self.units() {
            if let Some(output) = self.render(unit)? {
                rendered.push(output);
            }
        }
        Ok(rendered)
    }

    /// Render the class `id` into its unit.
    ///
    /// The declaration opens the unit, members follow in producer order one
    /// level deeper, and the end closes it. Malformed classes degrade instead
    /// of failing: without a declaration the members are written unwrapped,
    /// and a missing end is synthesized from the class name.
    pub fn render_class(&self, id: ElementId) -> Result<RenderedUnit, RenderError> {
        let backend = self.backend.language();
        let element = self
            .tree
            .get(id)
            .ok_or(RenderError::UnknownElement { backend, id })?;
        let ElementKind::Class(class) = element.kind() else {
            return Err(RenderError::UnexpectedKind {
                backend,
                name: element.name().to_string(),
                expected: "class",
                found: element.kind().kind_name(),
            });
        };

        let segmenter = self.backend.path_segmenter();
        let namespace = self
            .tree
            .parent(id)
            .and_then(|ns| self.tree.namespace_path(ns));
        // Classes outside any namespace are placed at the client root
        let path = segmenter
            .path_for(
                namespace.as_deref().unwrap_or(segmenter.client_namespace()),
                &class.name,
            )
            .map_err(|source| RenderError::Placement { backend, source })?;
        let mut w = CodeWriter::new(self.backend.indent());

        match self.tree.declaration(id) {
            Some((decl_id, declaration)) => {
                let ctx = DeclarationContext {
                    declaration,
                    namespace: self
                        .tree
                        .enclosing_namespace(decl_id)
                        .and_then(|ns| self.tree.namespace_path(ns)),
                    usings: declaration.distinct_usings(),
                };
                if ctx.namespace.is_none() {
                    warn!(class = %class.name, backend, "class has no enclosing namespace");
                }
                self.backend.write_class_declaration(&ctx, &mut w);
                {
                    let mut body = w.indented();
                    self.write_members(class.children(), &mut body);
                }
                let end = match self.class_end(class.children()) {
                    Some(end) => end.clone(),
                    None => {
                        warn!(class = %class.name, backend, "class has no end marker");
                        ClassEnd {
                            name: class.name.clone(),
                        }
                    }
                };
                self.backend.write_class_end(&end, &mut w);
            }
            None => {
                warn!(class = %class.name, backend, "class has no declaration, members are written unwrapped");
                self.write_members(class.children(), &mut w);
            }
        }
        debug_assert_eq!(w.depth(), 0);

        debug!(class = %class.name, path = %path.display(), "rendered class");
        Ok(RenderedUnit {
            path,
            content: w.build(),
            kind: UnitKind::Class,
        })
    }

    /// Render the unit of namespace `id`, if the backend writes one.
    pub fn render_namespace(&self, id: ElementId) -> Result<Option<RenderedUnit>, RenderError> {
        let backend = self.backend.language();
        let element = self
            .tree
            .get(id)
            .ok_or(RenderError::UnknownElement { backend, id })?;
        let ElementKind::Namespace(namespace) = element.kind() else {
            return Err(RenderError::UnexpectedKind {
                backend,
                name: element.name().to_string(),
                expected: "namespace",
                found: element.kind().kind_name(),
            });
        };

        let path = self.tree.namespace_path(id).unwrap_or_default();
        let mut classes = Vec::new();
        let mut namespaces = Vec::new();
        for child in namespace.children().iter().filter_map(|&c| self.tree.get(c)) {
            match child.kind() {
                ElementKind::Class(class) => classes.push(class.name.as_str()),
                ElementKind::Namespace(ns) => namespaces.push(ns.name.as_str()),
                _ => {}
            }
        }

        let ctx = NamespaceContext {
            path,
            classes,
            namespaces,
        };
        let mut w = CodeWriter::new(self.backend.indent());
        self.backend.write_namespace(&ctx, &mut w);
        if w.is_empty() {
            return Ok(None);
        }

        let path = self
            .backend
            .path_segmenter()
            .segments_for(&ctx.path)
            .map_err(|source| RenderError::Placement { backend, source })?
            .path();
        debug!(namespace = %ctx.path, path = %path.display(), "rendered namespace");
        Ok(Some(RenderedUnit {
            path,
            content: w.build(),
            kind: UnitKind::Namespace,
        }))
    }

    fn write_members(&self, children: &[ElementId], w: &mut CodeWriter) {
        for child in children.iter().filter_map(|&c| self.tree.get(c)) {
            match child.kind() {
                ElementKind::Property(property) => self.backend.write_property(property, w),
                ElementKind::Method(method) => self.backend.write_method(method, w),
                ElementKind::Indexer(indexer) => self.backend.write_indexer(indexer, w),
                ElementKind::ClassDeclaration(_) | ElementKind::ClassEnd(_) => {}
                other => warn!(
                    name = child.name(),
                    kind = other.kind_name(),
                    "skipping element that is not a class member"
                ),
            }
        }
    }

    fn class_end<'t>(&'t self, children: &[ElementId]) -> Option<&'t ClassEnd> {
        children
            .iter()
            .filter_map(|&c| self.tree.get(c))
            .find_map(|child| match child.kind() {
                ElementKind::ClassEnd(end) => Some(end),
                _ => None,
            })
    }
}
