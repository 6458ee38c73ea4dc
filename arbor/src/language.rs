//! Backends shipped with the binary.

use arbor_codegen::BackendRegistry;

/// Registry holding every built-in backend.
pub fn registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry
        .register(arbor_codegen_java::BACKEND)
        .register(arbor_codegen_typescript::BACKEND);
    registry
}
