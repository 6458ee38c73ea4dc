//! Rendering whole units with the TypeScript backend.

use std::path::PathBuf;

use arbor_codegen::{BackendOptions, Emitter, UnitKind, lower_indexer, testing::sample_tree};
use arbor_codegen::{CodeWriter, Indent, LanguageWriter};
use arbor_codegen_typescript::TypeScriptWriter;
use arbor_ir::{CodeIndexer, CodeType};

fn backend() -> TypeScriptWriter {
    TypeScriptWriter::new(&BackendOptions::new("src", "graph"))
}

#[test]
fn test_request_builder_module() {
    let tree = sample_tree();
    let backend = backend();
    let unit = Emitter::new(&tree, &backend)
        .render_class(tree.classes()[1])
        .unwrap();

    assert_eq!(unit.path, PathBuf::from("src/users/usersRequestBuilder.ts"));
    insta::assert_snapshot!(unit.content, @r#"
    import { ItemRequestBuilder } from "./item/itemRequestBuilder";

    export class UsersRequestBuilder {
      protected currentPath?: string;
      public get(position: string): ItemRequestBuilder {
        const builder = new ItemRequestBuilder();
        builder.currentPath = this.currentPath + this.pathSegment + "/" + position;
        return builder;
      }
      public async get(h?: (value: headers) => void): Promise<User | undefined> {
        return undefined;
      }
    }
    "#);
}

#[test]
fn test_indexer_lowering_end_to_end() {
    let indexer = CodeIndexer::new(
        "item",
        CodeType::new("ItemRequestBuilder"),
        CodeType::new("string"),
    );
    let backend = backend();

    let mut w = CodeWriter::new(Indent::TYPESCRIPT);
    backend.write_method(&lower_indexer(&indexer, backend.accessor_name()), &mut w);
    let rendered = w.build();

    assert!(rendered.contains("get(position: string)"));
    assert!(rendered.contains("const builder = new ItemRequestBuilder();"));
    assert!(rendered.contains(
        "builder.currentPath = this.currentPath + this.pathSegment + \"/\" + position;"
    ));
    assert!(rendered.contains("return builder;"));
}

#[test]
fn test_root_module_imports_from_child_directory() {
    let tree = sample_tree();
    let backend = backend();
    let unit = Emitter::new(&tree, &backend)
        .render_class(tree.classes()[0])
        .unwrap();

    assert_eq!(unit.path, PathBuf::from("src/graphClient.ts"));
    insta::assert_snapshot!(unit.content, @r#"
    import { UsersRequestBuilder } from "./users/usersRequestBuilder";

    export class GraphClient {
      protected pathSegment?: string = "";
      public users(): UsersRequestBuilder {
        return undefined;
      }
    }
    "#);
}

#[test]
fn test_barrels() {
    let tree = sample_tree();
    let backend = backend();
    let units = Emitter::new(&tree, &backend).render_all().unwrap();

    let barrels: Vec<_> = units
        .iter()
        .filter(|u| u.kind == UnitKind::Namespace)
        .map(|u| (u.path.to_string_lossy().into_owned(), u.content.as_str()))
        .collect();
    assert_eq!(
        barrels,
        vec![
            ("src/index.ts".to_string(), "export * from \"./graphClient\";\n"),
            (
                "src/users/index.ts".to_string(),
                "export * from \"./usersRequestBuilder\";\n"
            ),
            (
                "src/users/item/index.ts".to_string(),
                "export * from \"./itemRequestBuilder\";\n"
            ),
        ]
    );
}
