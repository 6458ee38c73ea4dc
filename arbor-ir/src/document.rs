//! Serialized model documents.
//!
//! A model document is the hand-off format between an external producer and
//! the generator. Loading one replays it through the [`CodeTree`] producer
//! API, so the same structural checks apply.

use serde::Deserialize;

use crate::{
    AccessModifier, CodeIndexer, CodeMethod, CodeParameter, CodeProperty, CodeTree, CodeType,
    CodeUsing, ElementId, MethodKind, Result,
};

/// Root of a model document: the client root namespace.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDocument {
    /// Segment of the root namespace (usually the client namespace name).
    pub namespace: String,
    #[serde(default)]
    pub classes: Vec<ClassDocument>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceDocument {
    pub name: String,
    #[serde(default)]
    pub classes: Vec<ClassDocument>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassDocument {
    pub name: String,
    #[serde(default)]
    pub usings: Vec<CodeUsing>,
    #[serde(default)]
    pub members: Vec<MemberDocument>,
}

/// A class member, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberDocument {
    Property(CodeProperty),
    Method(MethodDocument),
    Indexer(CodeIndexer),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodDocument {
    pub name: String,
    pub return_type: CodeType,
    #[serde(default)]
    pub parameters: Vec<CodeParameter>,
    #[serde(default)]
    pub access: AccessModifier,
    #[serde(rename = "async", default)]
    pub is_async: bool,
    #[serde(rename = "method_kind", default)]
    pub kind: MethodKind,
}

impl MethodDocument {
    fn into_method(self) -> Result<CodeMethod> {
        let mut method = CodeMethod::new(self.name, self.return_type)
            .access(self.access)
            .kind(self.kind);
        method.is_async = self.is_async;
        for parameter in self.parameters {
            method.add_parameter(parameter)?;
        }
        Ok(method)
    }
}

impl ModelDocument {
    /// Parse a model document from JSON.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Build the code tree described by this document.
    pub fn into_tree(self) -> Result<CodeTree> {
        let mut tree = CodeTree::new(self.namespace);
        let root = tree.root();
        add_classes(&mut tree, root, self.classes)?;
        add_namespaces(&mut tree, root, self.namespaces)?;
        Ok(tree)
    }
}

impl CodeTree {
    /// Parse a JSON model document and build its tree.
    pub fn from_json(src: &str) -> Result<Self> {
        ModelDocument::from_json(src)?.into_tree()
    }
}

fn add_namespaces(
    tree: &mut CodeTree,
    parent: ElementId,
    namespaces: Vec<NamespaceDocument>,
) -> Result<()> {
    for doc in namespaces {
        let ns = tree.add_namespace(parent, doc.name)?;
        add_classes(tree, ns, doc.classes)?;
        add_namespaces(tree, ns, doc.namespaces)?;
    }
    Ok(())
}

fn add_classes(tree: &mut CodeTree, namespace: ElementId, classes: Vec<ClassDocument>) -> Result<()> {
    for doc in classes {
        let class = tree.add_class(namespace, doc.name)?;
        for using in doc.usings {
            tree.add_using(class, using)?;
        }
        for member in doc.members {
            match member {
                MemberDocument::Property(prop) => tree.add_member(class, prop)?,
                MemberDocument::Method(method) => tree.add_member(class, method.into_method()?)?,
                MemberDocument::Indexer(indexer) => tree.add_member(class, indexer)?,
            };
        }
    }
    Ok(())
}
