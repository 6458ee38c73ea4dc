//! Backward-compatible lowering of indexers.
//!
//! Languages without an index operator address sub-resources through an
//! accessor method instead. The accessor is synthesized on the fly for each
//! render; the indexer stays in the tree untouched.

use arbor_ir::{CodeIndexer, CodeMethod, CodeParameter, MethodKind};

/// Name of the single parameter of a lowered accessor.
pub const INDEX_PARAMETER: &str = "position";

/// Build the accessor method an indexer renders as.
///
/// The method is public and synchronous, returns the indexer's return type and
/// takes one required `position` parameter of the index type.
pub fn lower_indexer(indexer: &CodeIndexer, accessor_name: &str) -> CodeMethod {
    let position = CodeParameter::new(INDEX_PARAMETER, indexer.index_type.clone());
    CodeMethod::with_parameter(accessor_name, indexer.return_type.clone(), position)
        .kind(MethodKind::IndexerBackwardCompatibility)
}
