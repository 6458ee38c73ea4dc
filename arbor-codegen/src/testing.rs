//! Test utilities for backends.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use arbor_core::{to_first_lower, to_first_upper};
use arbor_ir::{
    AccessModifier, ClassEnd, CodeIndexer, CodeMethod, CodeParameter, CodeProperty, CodeTree,
    CodeType, CodeUsing, MethodKind,
};

use crate::{
    language::{
        DeclarationContext, LanguageWriter, NamespaceContext, NamingConvention, PathSegmenter,
        TypeTranslator,
    },
    registry::BackendOptions,
    writer::{CodeWriter, Indent},
};

/// Build the tree most backend tests render:
///
/// ```text
/// graph
/// ├── GraphClient            (pathSegment, users())
/// └── users
///     ├── UsersRequestBuilder (currentPath, item[string], get(), using item builder twice)
///     └── item
///         └── ItemRequestBuilder
/// ```
pub fn sample_tree() -> CodeTree {
    build_sample().unwrap_or_else(|e| panic!("sample tree is well formed: {e}"))
}

fn build_sample() -> arbor_ir::Result<CodeTree> {
    let mut tree = CodeTree::new("graph");
    let root = tree.root();

    let client = tree.add_class(root, "graphClient")?;
    tree.add_using(client, CodeUsing::new("graph.users", "usersRequestBuilder"))?;
    tree.add_member(
        client,
        CodeProperty::new("pathSegment", CodeType::new("string"))
            .access(AccessModifier::Protected)
            .default_value("\"\""),
    )?;
    tree.add_member(
        client,
        CodeMethod::new("users", CodeType::new("usersRequestBuilder").non_null()),
    )?;

    let users = tree.add_namespace(root, "users")?;
    let builder = tree.add_class(users, "usersRequestBuilder")?;
    tree.add_using(builder, CodeUsing::new("graph.users.item", "itemRequestBuilder"))?;
    tree.add_using(builder, CodeUsing::new("graph.users.item", "itemRequestBuilder"))?;
    tree.add_member(
        builder,
        CodeProperty::new("currentPath", CodeType::new("string")).access(AccessModifier::Protected),
    )?;
    tree.add_member(
        builder,
        CodeIndexer::new(
            "item",
            CodeType::new("itemRequestBuilder").non_null(),
            CodeType::new("string"),
        ),
    )?;
    let mut get = CodeMethod::new("Get", CodeType::new("user"))
        .async_()
        .kind(MethodKind::RequestExecutor);
    get.add_parameter(CodeParameter::new("h", CodeType::new("headers").action()).optional())?;
    tree.add_member(builder, get)?;

    let item = tree.add_namespace(users, "item")?;
    tree.add_class(item, "itemRequestBuilder")?;
    Ok(tree)
}

/// A small pseudo-language backend that makes engine behavior visible.
#[derive(Debug, Clone)]
pub struct RecordingWriter {
    segmenter: RecordingSegmenter,
}

impl RecordingWriter {
    pub fn new(options: BackendOptions) -> Self {
        Self {
            segmenter: RecordingSegmenter { options },
        }
    }
}

const RECORDING_NAMING: NamingConvention = NamingConvention {
    to_type: to_first_upper,
    to_member: to_first_lower,
    reserved_words: &["fn"],
    escape_reserved,
};

fn escape_reserved(name: &str) -> String {
    format!("r_{name}")
}

impl LanguageWriter for RecordingWriter {
    fn language(&self) -> &'static str {
        "recording"
    }

    fn indent(&self) -> Indent {
        Indent::Spaces(2)
    }

    fn type_translator(&self) -> &dyn TypeTranslator {
        &RecordingTypes
    }

    fn path_segmenter(&self) -> &dyn PathSegmenter {
        &self.segmenter
    }

    fn naming(&self) -> &NamingConvention {
        &RECORDING_NAMING
    }

    fn access_modifier(&self, access: AccessModifier) -> &'static str {
        match access {
            AccessModifier::Public => "pub",
            AccessModifier::Protected => "prot",
            _ => "priv",
        }
    }

    fn parameter_signature(&self, parameter: &CodeParameter) -> String {
        let marker = if parameter.optional { "?" } else { "" };
        format!(
            "{}{marker}: {}",
            parameter.name,
            self.type_string(&parameter.ty)
        )
    }

    fn consumer_of(&self, inner: &str) -> String {
        format!("Fn<{inner}>")
    }

    fn nullability_marker(&self, _nullable: bool) -> Option<&'static str> {
        None
    }

    fn async_wrapper(&self, inner: &str) -> String {
        format!("Async<{inner}>")
    }

    fn write_class_declaration(&self, ctx: &DeclarationContext<'_>, w: &mut CodeWriter) {
        if let Some(namespace) = &ctx.namespace {
            w.line(&format!("in {namespace}"));
        }
        for using in &ctx.usings {
            w.line(&format!("use {}.{}", using.namespace, using.name));
        }
        w.line(&format!(
            "class {} {{",
            self.naming().type_name(&ctx.declaration.name)
        ));
    }

    fn write_class_end(&self, _end: &ClassEnd, w: &mut CodeWriter) {
        w.line("}");
    }

    fn write_property(&self, property: &CodeProperty, w: &mut CodeWriter) {
        let mut line = format!(
            "{} {}: {}",
            self.access_modifier(property.access),
            property.name,
            self.type_string(&property.ty)
        );
        if let Some(value) = property.initializer() {
            line.push_str(&format!(" = {value}"));
        }
        w.line(&line);
    }

    fn write_method(&self, method: &CodeMethod, w: &mut CodeWriter) {
        let parameters: Vec<_> = method
            .parameters()
            .iter()
            .map(|p| self.parameter_signature(p))
            .collect();
        let mut return_type = self.type_string(&method.return_type);
        if method.is_async {
            return_type = self.async_wrapper(&return_type);
        }
        w.block(
            &format!(
                "{} fn {}({}): {} {{",
                self.access_modifier(method.access),
                self.naming().member_name(&method.name),
                parameters.join(", "),
                return_type
            ),
            "}",
            |body| {
                body.line(method.kind.as_str());
            },
        );
    }

    fn write_namespace(&self, ctx: &NamespaceContext<'_>, w: &mut CodeWriter) {
        if ctx.classes.is_empty() {
            return;
        }
        w.line(&format!("module {}", ctx.path));
        for class in &ctx.classes {
            w.line(&format!("  {class}"));
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RecordingTypes;

impl TypeTranslator for RecordingTypes {
    fn map_primitive(&self, type_name: &str) -> Option<&'static str> {
        match type_name {
            "string" => Some("str"),
            "integer" => Some("int"),
            "boolean" => Some("bool"),
            "number" => Some("float"),
            "object" => Some("obj"),
            _ => None,
        }
    }

    fn map_array(&self, inner: &str) -> String {
        format!("[{inner}]")
    }

    fn untyped_object(&self) -> &'static str {
        "any"
    }
}

#[derive(Debug, Clone)]
struct RecordingSegmenter {
    options: BackendOptions,
}

impl PathSegmenter for RecordingSegmenter {
    fn root_path(&self) -> &Path {
        &self.options.root_path
    }

    fn client_namespace(&self) -> &str {
        &self.options.client_namespace
    }

    fn file_suffix(&self) -> &'static str {
        ".rec"
    }

    fn namespace_file_name(&self) -> &'static str {
        "mod"
    }

    fn normalize_file_name(&self, element_name: &str) -> String {
        to_first_lower(element_name)
    }
}

/// Shorthand for [`BackendOptions`] rooted at `out` for the `graph` client.
pub fn sample_options() -> BackendOptions {
    BackendOptions::new(PathBuf::from("out"), "graph")
}
