//! Java rendering of the code tree.

use arbor_codegen::{
    BackendOptions, CodeWriter, DeclarationContext, Indent, LanguageWriter, NamespaceContext,
    NamingConvention, PathSegmenter, TypeTranslator,
};
use arbor_core::to_first_upper;
use arbor_ir::{
    AccessModifier, ClassEnd, CodeMethod, CodeParameter, CodeProperty, CodeType, MethodKind,
};

use crate::{JAVA_NAMING, JavaPathSegmenter, JavaTypeTranslator};

const NULLABLE: &str = "@javax.annotation.Nullable";
const NONNULL: &str = "@javax.annotation.Nonnull";

/// Java backend.
///
/// Classes become `public class` declarations in a package matching their
/// namespace path. Async methods return `CompletableFuture`, callbacks are
/// `Consumer`s and nullability is expressed with `javax.annotation`.
#[derive(Debug, Clone)]
pub struct JavaWriter {
    segmenter: JavaPathSegmenter,
    translator: JavaTypeTranslator,
}

impl JavaWriter {
    pub fn new(options: &BackendOptions) -> Self {
        Self {
            segmenter: JavaPathSegmenter::from_options(options),
            translator: JavaTypeTranslator,
        }
    }

    /// Backend factory for the registry.
    pub fn boxed(options: &BackendOptions) -> Box<dyn LanguageWriter> {
        Box::new(Self::new(options))
    }

    /// Return type named by its class, wrapped in a consumer for callbacks.
    fn return_type(&self, ty: &CodeType) -> String {
        let name = to_first_upper(
            &self
                .type_translator()
                .translate(&ty.name, ty.schema.as_ref()),
        );
        if ty.action_of {
            self.consumer_of(&name)
        } else {
            name
        }
    }

    fn write_method_body(&self, method: &CodeMethod, return_type: &str, w: &mut CodeWriter) {
        match method.kind {
            MethodKind::IndexerBackwardCompatibility => {
                w.line(&format!(
                    "final {return_type} builder = new {return_type}();"
                ));
                w.line("builder.currentPath = this.currentPath + this.pathSegment + \"/\" + position;");
                w.line("return builder;");
            }
            _ => {
                w.line("return null;");
            }
        }
    }
}

impl LanguageWriter for JavaWriter {
    fn language(&self) -> &'static str {
        "java"
    }

    fn indent(&self) -> Indent {
        Indent::JAVA
    }

    fn type_translator(&self) -> &dyn TypeTranslator {
        &self.translator
    }

    fn path_segmenter(&self) -> &dyn PathSegmenter {
        &self.segmenter
    }

    fn naming(&self) -> &NamingConvention {
        &JAVA_NAMING
    }

    fn access_modifier(&self, access: AccessModifier) -> &'static str {
        match access {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            _ => "private",
        }
    }

    fn parameter_signature(&self, parameter: &CodeParameter) -> String {
        let annotation = if parameter.optional { NULLABLE } else { NONNULL };
        format!(
            "{annotation} final {} {}",
            self.type_string(&parameter.ty),
            self.naming().safe_name(&parameter.name)
        )
    }

    fn consumer_of(&self, inner: &str) -> String {
        format!("java.util.function.Consumer<{inner}>")
    }

    fn nullability_marker(&self, nullable: bool) -> Option<&'static str> {
        Some(if nullable { NULLABLE } else { NONNULL })
    }

    fn async_wrapper(&self, inner: &str) -> String {
        format!("java.util.concurrent.CompletableFuture<{inner}>")
    }

    fn write_class_declaration(&self, ctx: &DeclarationContext<'_>, w: &mut CodeWriter) {
        if let Some(namespace) = &ctx.namespace {
            w.line(&format!("package {namespace};"));
            w.blank();
            for using in &ctx.usings {
                w.line(&format!(
                    "import {}.{};",
                    using.namespace,
                    to_first_upper(&using.name)
                ));
            }
            if !ctx.usings.is_empty() {
                w.blank();
            }
        }
        w.line(&format!(
            "public class {} {{",
            self.naming().type_name(&ctx.declaration.name)
        ));
    }

    fn write_class_end(&self, _end: &ClassEnd, w: &mut CodeWriter) {
        w.line("}");
    }

    fn write_property(&self, property: &CodeProperty, w: &mut CodeWriter) {
        if let Some(marker) = self.nullability_marker(property.ty.is_nullable) {
            w.line(marker);
        }
        let modifier = if property.read_only { " final " } else { " " };
        let initializer = property
            .initializer()
            .map(|value| format!(" = {value}"))
            .unwrap_or_default();
        w.line(&format!(
            "{}{modifier}{} {}{initializer};",
            self.access_modifier(property.access),
            self.type_string(&property.ty),
            self.naming().safe_name(&property.name)
        ));
    }

    fn write_method(&self, method: &CodeMethod, w: &mut CodeWriter) {
        if let Some(marker) = self.nullability_marker(method.return_type.is_nullable) {
            w.line(marker);
        }
        let return_type = self.return_type(&method.return_type);
        let signature_type = if method.is_async {
            self.async_wrapper(&return_type)
        } else {
            return_type.clone()
        };
        let parameters: Vec<_> = method
            .parameters()
            .iter()
            .map(|p| self.parameter_signature(p))
            .collect();
        let header = format!(
            "{} {signature_type} {}({}) {{",
            self.access_modifier(method.access),
            self.naming().member_name(&method.name),
            parameters.join(", ")
        );
        w.block(&header, "}", |body| {
            self.write_method_body(method, &return_type, body)
        });
    }

    fn write_namespace(&self, ctx: &NamespaceContext<'_>, w: &mut CodeWriter) {
        if ctx.path.is_empty() {
            return;
        }
        w.line(&format!("package {};", ctx.path));
    }
}

#[cfg(test)]
mod tests {
    use arbor_ir::TypeSchema;

    use super::*;

    fn writer() -> JavaWriter {
        JavaWriter::new(&BackendOptions::new("out", "graph"))
    }

    fn property_lines(property: &CodeProperty) -> String {
        let mut w = CodeWriter::new(Indent::JAVA);
        writer().write_property(property, &mut w);
        w.build()
    }

    #[test]
    fn test_access_modifiers() {
        let w = writer();
        assert_eq!(w.access_modifier(AccessModifier::Public), "public");
        assert_eq!(w.access_modifier(AccessModifier::Protected), "protected");
        assert_eq!(w.access_modifier(AccessModifier::Private), "private");
        assert_eq!(w.access_modifier(AccessModifier::from("internal")), "private");
    }

    #[test]
    fn test_parameter_signature() {
        let w = writer();
        let required = CodeParameter::new("position", CodeType::new("string"));
        assert_eq!(
            w.parameter_signature(&required),
            "@javax.annotation.Nonnull final String position"
        );

        let callback = CodeParameter::new("h", CodeType::new("headers").action()).optional();
        assert_eq!(
            w.parameter_signature(&callback),
            "@javax.annotation.Nullable final java.util.function.Consumer<headers> h"
        );
    }

    #[test]
    fn test_property_default_value() {
        let count = CodeProperty::new("count", CodeType::new("integer").non_null());
        assert_eq!(
            property_lines(&count),
            "@javax.annotation.Nonnull\npublic Integer count;\n"
        );
        assert_eq!(
            property_lines(&count.clone().default_value("")),
            "@javax.annotation.Nonnull\npublic Integer count;\n"
        );
        assert_eq!(
            property_lines(&count.default_value("0")),
            "@javax.annotation.Nonnull\npublic Integer count = 0;\n"
        );
    }

    #[test]
    fn test_read_only_property() {
        let tags = CodeProperty::new(
            "tags",
            CodeType::array_of(TypeSchema::array_of(TypeSchema::of("string"))),
        )
        .access(AccessModifier::Private)
        .read_only();
        assert_eq!(
            property_lines(&tags),
            "@javax.annotation.Nullable\nprivate final String[][] tags;\n"
        );
    }

    #[test]
    fn test_async_method() {
        let mut method = CodeMethod::new("Get", CodeType::new("user")).async_();
        method
            .add_parameter(CodeParameter::new("h", CodeType::new("headers").action()).optional())
            .unwrap();

        let mut w = CodeWriter::new(Indent::JAVA);
        writer().write_method(&method, &mut w);
        assert_eq!(
            w.build(),
            "\
@javax.annotation.Nullable
public java.util.concurrent.CompletableFuture<User> get(@javax.annotation.Nullable final java.util.function.Consumer<headers> h) {
    return null;
}
"
        );
    }

    #[test]
    fn test_callback_return_type_keeps_package_lowercase() {
        let method = CodeMethod::new("onHeaders", CodeType::new("headers").action().non_null());

        let mut w = CodeWriter::new(Indent::JAVA);
        writer().write_method(&method, &mut w);
        assert_eq!(
            w.build(),
            "\
@javax.annotation.Nonnull
public java.util.function.Consumer<Headers> onHeaders() {
    return null;
}
"
        );
    }

    #[test]
    fn test_namespace_unit() {
        let ctx = NamespaceContext {
            path: "graph.users".to_string(),
            classes: vec!["usersRequestBuilder"],
            namespaces: vec!["item"],
        };
        let mut w = CodeWriter::new(Indent::JAVA);
        writer().write_namespace(&ctx, &mut w);
        assert_eq!(w.build(), "package graph.users;\n");
    }
}
