//! Model type names to target-language type strings.

use arbor_ir::TypeSchema;

/// Maps model type names to attribute-type strings of one target language.
///
/// Backends provide the primitive table, the array form and the untyped
/// fallback; [`TypeTranslator::translate`] handles recursion into array item
/// schemas.
pub trait TypeTranslator: Send + Sync {
    /// Target type for a known primitive (`integer`, `number`, `boolean`,
    /// `string`, `object`), or `None` to pass the name through.
    fn map_primitive(&self, type_name: &str) -> Option<&'static str>;

    /// Array form wrapping an already translated element type.
    fn map_array(&self, inner: &str) -> String;

    /// Type used when no type name is given.
    fn untyped_object(&self) -> &'static str;

    /// Translate a type name, consulting `schema` when it denotes an array.
    ///
    /// Names without a mapping are locally defined types and are returned
    /// unchanged.
    fn translate(&self, type_name: &str, schema: Option<&TypeSchema>) -> String {
        if type_name.is_empty() {
            return self.untyped_object().to_string();
        }
        if type_name == "array" {
            let inner = match schema.and_then(TypeSchema::items) {
                Some(items) => self.translate(items.type_name().unwrap_or_default(), Some(items)),
                None => self.untyped_object().to_string(),
            };
            return self.map_array(&inner);
        }
        match self.map_primitive(type_name) {
            Some(mapped) => mapped.to_string(),
            None => type_name.to_string(),
        }
    }
}
