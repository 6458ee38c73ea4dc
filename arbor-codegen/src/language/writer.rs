//! The per-language capability interface.

use arbor_ir::{
    AccessModifier, ClassDeclaration, ClassEnd, CodeIndexer, CodeMethod, CodeParameter,
    CodeProperty, CodeType, CodeUsing,
};

use super::{NamingConvention, PathSegmenter, TypeTranslator};
use crate::{lower::lower_indexer, writer::{CodeWriter, Indent}};

/// What a backend sees when it renders a class declaration.
#[derive(Debug, Clone)]
pub struct DeclarationContext<'a> {
    pub declaration: &'a ClassDeclaration,
    /// Dotted path of the enclosing namespace, when the class has one.
    pub namespace: Option<String>,
    /// Using references with duplicates removed, in first-seen order.
    pub usings: Vec<&'a CodeUsing>,
}

/// What a backend sees when it renders the unit of a namespace.
#[derive(Debug, Clone)]
pub struct NamespaceContext<'a> {
    /// Dotted path of the namespace.
    pub path: String,
    /// Names of the classes declared directly in the namespace.
    pub classes: Vec<&'a str>,
    /// Segments of the direct child namespaces.
    pub namespaces: Vec<&'a str>,
}

/// Everything the rendering engine needs from one target language.
///
/// The engine walks the tree and calls the `write_*` hooks in order; a
/// backend only decides how each element reads. Between
/// [`write_class_declaration`](Self::write_class_declaration) and
/// [`write_class_end`](Self::write_class_end) the engine holds the writer one
/// level deeper, so member hooks never manage indentation themselves.
pub trait LanguageWriter: Send + Sync {
    /// Registry identifier, e.g. "java".
    fn language(&self) -> &'static str;

    fn indent(&self) -> Indent;

    fn type_translator(&self) -> &dyn TypeTranslator;

    fn path_segmenter(&self) -> &dyn PathSegmenter;

    fn naming(&self) -> &NamingConvention;

    /// Keyword for an access level.
    fn access_modifier(&self, access: AccessModifier) -> &'static str;

    /// Parameter as it appears in a method signature.
    fn parameter_signature(&self, parameter: &CodeParameter) -> String;

    /// Callback type receiving one value of `inner`.
    fn consumer_of(&self, inner: &str) -> String;

    /// Annotation or marker emitted before a member for the given nullability.
    fn nullability_marker(&self, nullable: bool) -> Option<&'static str>;

    /// Async wrapper around a return type.
    fn async_wrapper(&self, inner: &str) -> String;

    /// Method name used for lowered indexers.
    fn accessor_name(&self) -> &'static str {
        "get"
    }

    /// Rendered type string: translated name, wrapped in a consumer when the
    /// type is a callback.
    fn type_string(&self, ty: &CodeType) -> String {
        let name = self
            .type_translator()
            .translate(&ty.name, ty.schema.as_ref());
        if ty.action_of {
            self.consumer_of(&name)
        } else {
            name
        }
    }

    /// Header of a class: package line, imports and the opening line.
    fn write_class_declaration(&self, ctx: &DeclarationContext<'_>, w: &mut CodeWriter);

    /// Close of a class body.
    fn write_class_end(&self, end: &ClassEnd, w: &mut CodeWriter);

    fn write_property(&self, property: &CodeProperty, w: &mut CodeWriter);

    fn write_method(&self, method: &CodeMethod, w: &mut CodeWriter);

    /// Inline type string, written without indentation or newline.
    fn write_type(&self, ty: &CodeType, w: &mut CodeWriter) {
        w.raw(&self.type_string(ty));
    }

    /// Indexers render as the accessor method they lower to.
    fn write_indexer(&self, indexer: &CodeIndexer, w: &mut CodeWriter) {
        let method = lower_indexer(indexer, self.accessor_name());
        self.write_method(&method, w);
    }

    /// Unit for the namespace itself. Writing nothing means the namespace has
    /// no unit of its own.
    fn write_namespace(&self, _ctx: &NamespaceContext<'_>, _w: &mut CodeWriter) {}
}
