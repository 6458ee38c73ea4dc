//! TypeScript rendering of the code tree.

use arbor_codegen::{
    BackendOptions, CodeWriter, DeclarationContext, Indent, LanguageWriter, NamespaceContext,
    NamingConvention, PathSegmenter, TypeTranslator,
};
use arbor_core::to_first_upper;
use arbor_ir::{
    AccessModifier, ClassEnd, CodeMethod, CodeParameter, CodeProperty, CodeType, CodeUsing,
    MethodKind,
};

use crate::{
    Import, TS_NAMING, TypeScriptPathSegmenter, TypeScriptTypeTranslator, package_module,
    relative_module,
};

/// Type keywords that keep their casing in return positions.
const BUILTIN_TYPES: &[&str] = &["number", "boolean", "string", "object"];

/// TypeScript backend.
///
/// Each class is an ES module exporting one class; nullable values are typed
/// `T | undefined` and async methods return `Promise`s.
#[derive(Debug, Clone)]
pub struct TypeScriptWriter {
    segmenter: TypeScriptPathSegmenter,
    translator: TypeScriptTypeTranslator,
}

impl TypeScriptWriter {
    pub fn new(options: &BackendOptions) -> Self {
        Self {
            segmenter: TypeScriptPathSegmenter::from_options(options),
            translator: TypeScriptTypeTranslator,
        }
    }

    /// Backend factory for the registry.
    pub fn boxed(options: &BackendOptions) -> Box<dyn LanguageWriter> {
        Box::new(Self::new(options))
    }

    /// Return type with a leading upper-case character unless it is a keyword.
    fn return_type(&self, ty: &CodeType) -> String {
        let name = self
            .type_translator()
            .translate(&ty.name, ty.schema.as_ref());
        let keyword = BUILTIN_TYPES.contains(&name.trim_end_matches("[]"));
        let name = if keyword { name } else { to_first_upper(&name) };
        if ty.action_of {
            self.consumer_of(&name)
        } else {
            name
        }
    }

    /// Module specifier for a using seen from a class in `namespace`.
    ///
    /// Usings outside the client namespace are imported by package path.
    fn import_module(&self, namespace: &str, using: &CodeUsing) -> String {
        let file = self.segmenter.normalize_file_name(&using.name);
        match (
            self.segmenter.directory_for(namespace),
            self.segmenter.directory_for(&using.namespace),
        ) {
            (Ok(here), Ok(there)) => relative_module(&here, &there, &file),
            _ => package_module(&using.namespace, &file),
        }
    }

    fn write_method_body(&self, method: &CodeMethod, return_type: &str, w: &mut CodeWriter) {
        match method.kind {
            MethodKind::IndexerBackwardCompatibility => {
                w.line(&format!("const builder = new {return_type}();"));
                w.line("builder.currentPath = this.currentPath + this.pathSegment + \"/\" + position;");
                w.line("return builder;");
            }
            _ => {
                w.line("return undefined;");
            }
        }
    }
}

fn or_undefined(rendered: String, nullable: bool) -> String {
    if nullable {
        format!("{rendered} | undefined")
    } else {
        rendered
    }
}

impl LanguageWriter for TypeScriptWriter {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn indent(&self) -> Indent {
        Indent::TYPESCRIPT
    }

    fn type_translator(&self) -> &dyn TypeTranslator {
        &self.translator
    }

    fn path_segmenter(&self) -> &dyn PathSegmenter {
        &self.segmenter
    }

    fn naming(&self) -> &NamingConvention {
        &TS_NAMING
    }

    fn access_modifier(&self, access: AccessModifier) -> &'static str {
        match access {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            _ => "private",
        }
    }

    fn parameter_signature(&self, parameter: &CodeParameter) -> String {
        let marker = if parameter.optional { "?" } else { "" };
        format!(
            "{}{marker}: {}",
            self.naming().safe_name(&parameter.name),
            self.type_string(&parameter.ty)
        )
    }

    fn consumer_of(&self, inner: &str) -> String {
        format!("(value: {inner}) => void")
    }

    fn nullability_marker(&self, _nullable: bool) -> Option<&'static str> {
        None
    }

    fn async_wrapper(&self, inner: &str) -> String {
        format!("Promise<{inner}>")
    }

    fn write_class_declaration(&self, ctx: &DeclarationContext<'_>, w: &mut CodeWriter) {
        if let Some(namespace) = &ctx.namespace {
            for using in &ctx.usings {
                let module = self.import_module(namespace, using);
                w.line(
                    &Import::new(module)
                        .named(self.naming().type_name(&using.name))
                        .to_line(),
                );
            }
            if !ctx.usings.is_empty() {
                w.blank();
            }
        }
        w.line(&format!(
            "export class {} {{",
            self.naming().type_name(&ctx.declaration.name)
        ));
    }

    fn write_class_end(&self, _end: &ClassEnd, w: &mut CodeWriter) {
        w.line("}");
    }

    fn write_property(&self, property: &CodeProperty, w: &mut CodeWriter) {
        let readonly = if property.read_only { "readonly " } else { "" };
        let optional = if property.ty.is_nullable { "?" } else { "" };
        let initializer = property
            .initializer()
            .map(|value| format!(" = {value}"))
            .unwrap_or_default();
        w.line(&format!(
            "{} {readonly}{}{optional}: {}{initializer};",
            self.access_modifier(property.access),
            self.naming().safe_name(&property.name),
            self.type_string(&property.ty)
        ));
    }

    fn write_method(&self, method: &CodeMethod, w: &mut CodeWriter) {
        let return_type = self.return_type(&method.return_type);
        let mut signature_type = or_undefined(return_type.clone(), method.return_type.is_nullable);
        if method.is_async {
            signature_type = self.async_wrapper(&signature_type);
        }
        let parameters: Vec<_> = method
            .parameters()
            .iter()
            .map(|p| self.parameter_signature(p))
            .collect();
        let header = format!(
            "{} {}{}({}): {signature_type} {{",
            self.access_modifier(method.access),
            if method.is_async { "async " } else { "" },
            self.naming().member_name(&method.name),
            parameters.join(", ")
        );
        w.block(&header, "}", |body| {
            self.write_method_body(method, &return_type, body)
        });
    }

    fn write_namespace(&self, ctx: &NamespaceContext<'_>, w: &mut CodeWriter) {
        for class in &ctx.classes {
            w.line(&format!(
                "export * from \"./{}\";",
                self.segmenter.normalize_file_name(class)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use arbor_ir::TypeSchema;

    use super::*;

    fn writer() -> TypeScriptWriter {
        TypeScriptWriter::new(&BackendOptions::new("src", "graph"))
    }

    fn property_line(property: &CodeProperty) -> String {
        let mut w = CodeWriter::new(Indent::TYPESCRIPT);
        writer().write_property(property, &mut w);
        w.build()
    }

    #[test]
    fn test_access_modifiers() {
        let w = writer();
        assert_eq!(w.access_modifier(AccessModifier::Public), "public");
        assert_eq!(w.access_modifier(AccessModifier::Protected), "protected");
        assert_eq!(w.access_modifier(AccessModifier::Private), "private");
        assert_eq!(w.access_modifier(AccessModifier::from("package")), "private");
    }

    #[test]
    fn test_property_default_value() {
        let count = CodeProperty::new("count", CodeType::new("integer").non_null());
        assert_eq!(property_line(&count), "public count: number;\n");
        assert_eq!(
            property_line(&count.clone().default_value("")),
            "public count: number;\n"
        );
        assert_eq!(
            property_line(&count.default_value("0")),
            "public count: number = 0;\n"
        );
    }

    #[test]
    fn test_nullable_read_only_property() {
        let tags = CodeProperty::new(
            "tags",
            CodeType::array_of(TypeSchema::array_of(TypeSchema::of("string"))),
        )
        .read_only();
        assert_eq!(property_line(&tags), "public readonly tags?: string[][];\n");
    }

    #[test]
    fn test_return_types_keep_keywords() {
        let w = writer();
        assert_eq!(w.return_type(&CodeType::new("string")), "string");
        assert_eq!(w.return_type(&CodeType::new("user")), "User");
        assert_eq!(
            w.return_type(&CodeType::array_of(TypeSchema::of("integer"))),
            "number[]"
        );
    }

    #[test]
    fn test_callback_return_type_capitalizes_payload() {
        let w = writer();
        assert_eq!(
            w.return_type(&CodeType::new("headers").action()),
            "(value: Headers) => void"
        );
        assert_eq!(
            w.return_type(&CodeType::new("string").action()),
            "(value: string) => void"
        );
    }

    #[test]
    fn test_imports_resolve_relative_to_class() {
        let declaration = arbor_ir::ClassDeclaration::new("usersRequestBuilder");
        let item = CodeUsing::new("graph.users.item", "itemRequestBuilder");
        let client = CodeUsing::new("graph", "graphClient");
        let external = CodeUsing::new("contoso.models", "Widget");
        let ctx = DeclarationContext {
            declaration: &declaration,
            namespace: Some("graph.users".to_string()),
            usings: vec![&item, &client, &external],
        };
        let mut w = CodeWriter::new(Indent::TYPESCRIPT);
        writer().write_class_declaration(&ctx, &mut w);
        assert_eq!(
            w.build(),
            "\
import { ItemRequestBuilder } from \"./item/itemRequestBuilder\";
import { GraphClient } from \"../graphClient\";
import { Widget } from \"contoso/models/widget\";

export class UsersRequestBuilder {
"
        );
    }

    #[test]
    fn test_barrel() {
        let ctx = NamespaceContext {
            path: "graph.users".to_string(),
            classes: vec!["UsersRequestBuilder", "index"],
            namespaces: vec!["item"],
        };
        let mut w = CodeWriter::new(Indent::TYPESCRIPT);
        writer().write_namespace(&ctx, &mut w);
        assert_eq!(
            w.build(),
            "export * from \"./usersRequestBuilder\";\nexport * from \"./index_\";\n"
        );
    }
}
