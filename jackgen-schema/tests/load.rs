//! Schema loading tests.

use std::fs;

use jackgen_graph::{Type, TypeId, TypeKind};
use jackgen_schema::{Error, SchemaSource, TypeGraph, load, load_str};
use tempfile::TempDir;

fn top_level(graph: &TypeGraph, name: &str) -> Option<TypeId> {
    graph
        .top_levels()
        .find(|(given, _)| *given == name)
        .map(|(_, id)| id)
}

#[test]
fn test_object_with_required_and_nullable() {
    let graph = load_str(
        "Order",
        r#"{
            "type": "object",
            "properties": {
                "id": { "type": "integer" },
                "note": { "type": ["string", "null"], "description": "Free text" }
            },
            "required": ["id"]
        }"#,
    )
    .unwrap();

    let root = top_level(&graph, "Order").unwrap();
    let node = graph.node(root);
    assert_eq!(node.combined_name(), Some("Order"));

    let class = node.as_class().unwrap();
    let names: Vec<&str> = class.properties().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["id", "note"]);

    let id = class.property("id").unwrap();
    assert!(!id.optional);
    assert_eq!(graph.node(id.ty).kind(), TypeKind::Integer);

    let note = class.property("note").unwrap();
    assert!(note.optional);
    assert!(graph.is_nullable(note.ty));
    assert_eq!(note.description.as_deref(), Some("Free text"));
}

#[test]
fn test_definitions_and_self_reference() {
    let graph = load_str(
        "Tree",
        r##"{
            "$ref": "#/definitions/node",
            "definitions": {
                "node": {
                    "type": "object",
                    "properties": {
                        "children": { "type": "array", "items": { "$ref": "#/definitions/node" } }
                    }
                }
            }
        }"##,
    )
    .unwrap();

    let root = top_level(&graph, "Tree").unwrap();
    let node = graph.node(root);
    assert_eq!(node.combined_name(), Some("Node"));

    let children = node.as_class().unwrap().property("children").unwrap();
    match &graph.node(children.ty).ty {
        Type::Array { items } => assert_eq!(*items, root),
        other => panic!("expected array, got {:?}", other),
    }
}

#[test]
fn test_enum_with_null() {
    let graph = load_str("Color", r#"{ "enum": ["red", "green", null] }"#).unwrap();
    let root = top_level(&graph, "Color").unwrap();

    assert!(graph.is_nullable(root));
    let inner = graph.nullable_inner(root).unwrap();
    let cases: Vec<&str> = graph
        .node(inner)
        .as_enum()
        .unwrap()
        .cases
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(cases, vec!["red", "green"]);
}

#[test]
fn test_map_from_additional_properties() {
    let graph = load_str(
        "Scores",
        r#"{ "type": "object", "additionalProperties": { "type": "number" } }"#,
    )
    .unwrap();
    let root = top_level(&graph, "Scores").unwrap();

    match &graph.node(root).ty {
        Type::Map { values } => assert_eq!(graph.node(*values).kind(), TypeKind::Double),
        other => panic!("expected map, got {:?}", other),
    }
}

#[test]
fn test_same_title_in_two_sources_is_made_unique() {
    let item = r#"{ "title": "Item", "type": "object", "properties": {} }"#;
    let graph = load(&[SchemaSource::new("A", item), SchemaSource::new("B", item)]).unwrap();

    let a = graph.node(top_level(&graph, "A").unwrap());
    let b = graph.node(top_level(&graph, "B").unwrap());
    assert_eq!(a.combined_name(), Some("Item"));
    assert_eq!(b.combined_name(), Some("Item2"));
}

#[test]
fn test_duplicate_top_level_name_is_rejected() {
    let object = r#"{ "type": "object", "properties": { "x": { "type": "integer" } } }"#;
    let array = r#"{ "type": "array", "items": { "type": "integer" } }"#;
    let err = load(&[
        SchemaSource::new("Point", object),
        SchemaSource::new("Point", array).with_filename("b/point.json"),
    ])
    .unwrap_err();

    match *err {
        Error::DuplicateTopLevel { name, filename } => {
            assert_eq!(name, "Point");
            assert_eq!(filename, "b/point.json");
        }
        other => panic!("expected duplicate top-level, got {:?}", other),
    }
}

#[test]
fn test_open_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("person.schema.json");
    fs::write(&path, r#"{ "type": "string" }"#).unwrap();

    let source = SchemaSource::open("Person", &path).unwrap();
    let graph = load(&[source]).unwrap();
    let root = top_level(&graph, "Person").unwrap();
    assert_eq!(graph.node(root).kind(), TypeKind::String);
}

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = SchemaSource::open("Missing", temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_parse_error() {
    let err = load_str("Broken", "{ \"type\": ").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_unresolved_ref() {
    let err = load_str("Root", r##"{ "$ref": "#/definitions/Missing" }"##).unwrap_err();
    match *err {
        Error::UnresolvedRef { reference, .. } => assert_eq!(reference, "#/definitions/Missing"),
        other => panic!("expected unresolved ref, got {:?}", other),
    }
}

#[test]
fn test_circular_ref() {
    let err = load_str(
        "Root",
        r##"{ "$ref": "#/definitions/a", "definitions": { "a": { "$ref": "#/definitions/a" } } }"##,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::CircularRef { .. }));
}

#[test]
fn test_unsupported_type() {
    let err = load_str("Root", r#"{ "type": "date" }"#).unwrap_err();
    match *err {
        Error::UnsupportedType { ty, pointer, .. } => {
            assert_eq!(ty, "date");
            assert_eq!(pointer, "#");
        }
        other => panic!("expected unsupported type, got {:?}", other),
    }
}
