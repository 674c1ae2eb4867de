//! Integration tests for Settei
//!
//! End-to-end tests that load definitions, graphs and override files from JSON.
//!
mod common;
use common::*;
use settei::prelude::*;
use settei::schema::NoTypeInformation;
use std::fs;
use std::sync::Arc;

const DEFINITIONS_JSON: &str = r##"{
    "categories": [{
        "id": "image",
        "name": "Image",
        "description": "Image processing",
        "icon": "BsImage",
        "color": "#C53030",
        "groups": [
            { "id": "image/io", "category": "image", "name": "Input & Output", "order": ["image:save", "image:load"] }
        ]
    }],
    "schemas": [
        {
            "schemaId": "image:load",
            "name": "Load Image",
            "category": "image",
            "nodeGroup": "image/io",
            "inputs": [
                { "id": 0, "label": "Image File", "kind": "file", "filetypes": [".png", ".jpg", ".webp"] }
            ],
            "outputs": [
                { "id": 0, "label": "Image", "kind": "large-image" },
                { "id": 1, "label": "Name" }
            ],
            "groupLayout": [0]
        },
        {
            "schemaId": "image:save",
            "name": "Save Image",
            "category": "image",
            "nodeGroup": "image/io",
            "hasSideEffects": true,
            "inputs": [
                { "id": 0, "label": "Image", "kind": "generic" },
                { "id": 1, "label": "Directory", "kind": "directory" },
                { "id": 2, "label": "Name", "kind": "text", "minLength": 1 },
                { "id": 3, "label": "Format", "kind": "dropdown", "options": [
                    { "option": "PNG", "value": "png" },
                    { "option": "JPG", "value": "jpg" }
                ] },
                { "id": 4, "label": "Quality", "kind": "slider", "min": 0, "max": 100, "precision": 0, "def": 95 },
                { "id": 5, "label": "Progressive", "kind": "number", "min": 0, "max": 1, "precision": 0, "optional": true }
            ],
            "outputs": [],
            "groupLayout": [
                0, 1, 2, 3,
                { "id": 0, "kind": "conditional",
                  "options": { "condition": { "kind": "enum", "enum": 3, "values": ["jpg"] } },
                  "items": [4, { "id": 1, "kind": "required", "options": {}, "items": [5] }] }
            ]
        }
    ]
}"##;

const GRAPH_JSON: &str = r#"{
    "nodes": [
        { "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "data": { "schemaId": "image:load", "inputData": { "0": "in.png" } } },
        { "id": "9b2f0c1e-4d6a-4c3b-8e7f-0a1b2c3d4e5f", "data": { "schemaId": "image:save", "inputData": { "1": "/out", "2": "result", "3": "jpg", "4": 95 } } }
    ],
    "edges": [
        { "id": "e1", "source": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "sourceHandle": "out-0",
          "target": "9b2f0c1e-4d6a-4c3b-8e7f-0a1b2c3d4e5f", "targetHandle": "in-0" }
    ]
}"#;

#[test]
fn test_definitions_load_and_index() {
    let (categories, schemas) = DefinitionSet::from_json(DEFINITIONS_JSON)
        .expect("Failed to load definitions")
        .into_parts();

    assert_eq!(categories.len(), 1);
    assert_eq!(schemas.len(), 2);

    let group = categories
        .get_group(&NodeGroupId::from("image/io"))
        .expect("Group should be indexed");
    let sorted: Vec<&str> = group
        .sort_schemas(schemas.iter().map(|s| s.as_ref()))
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(sorted, ["Save Image", "Load Image"]);

    let load = schemas.get_schema(&SchemaId::from("image:load")).unwrap();
    assert_eq!(load.outputs[0].kind, OutputKind::LargeImage);
    assert_eq!(load.outputs[1].kind, OutputKind::Generic);
}

#[test]
fn test_conditions_follow_dropdown_value() {
    let (_, schemas) = DefinitionSet::from_json(DEFINITIONS_JSON).unwrap().into_parts();
    let save: &Arc<NodeSchema> = schemas.get_shared(&SchemaId::from("image:save")).unwrap();
    let graph = Graph::from_json(GRAPH_JSON).unwrap();
    let mut node = graph.node(&NodeId::from(NODE_B)).unwrap().clone();

    let resolver = ConditionResolver::new();
    let conditions = resolver.resolve(save);

    assert!(conditions.get(InputId::new(3)).is_none());
    assert_eq!(
        conditions.get(InputId::new(5)).map(ToString::to_string),
        Some(r#"#3 in ["jpg"]"#.to_string())
    );
    assert!(conditions.is_active(InputId::new(4), &node.data.input_data, &NoTypeInformation));

    node.data
        .input_data
        .insert(InputId::new(3), Some(InputValue::from("png")));
    assert!(!conditions.is_active(InputId::new(4), &node.data.input_data, &NoTypeInformation));
    assert!(!conditions.is_active(InputId::new(5), &node.data.input_data, &NoTypeInformation));
}

#[test]
fn test_apply_overrides_from_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let definitions_path = dir.path().join("definitions.json");
    let graph_path = dir.path().join("graph.json");
    let overrides_path = dir.path().join("overrides.json");

    fs::write(&definitions_path, DEFINITIONS_JSON).unwrap();
    fs::write(&graph_path, GRAPH_JSON).unwrap();
    fs::write(
        &overrides_path,
        serde_json::json!({
            "inputs": {
                override_key(NODE_A, 0): "photos/cat.WEBP",
                override_key(NODE_B, 4): 80,
                override_key(NODE_B, 5): null,
                override_key(MISSING_NODE, 1): "/elsewhere"
            }
        })
        .to_string(),
    )
    .unwrap();

    let (_, schemas) = DefinitionSet::from_file(definitions_path.to_str().unwrap())
        .unwrap()
        .into_parts();
    let mut graph = Graph::from_file(graph_path.to_str().unwrap()).unwrap();
    let overrides = OverrideFile::from_file(overrides_path.to_str().unwrap()).unwrap();

    let report = apply_overrides(&overrides, &mut graph, &schemas).unwrap();
    assert_eq!(report.applied, 3);
    assert_eq!(report.unmatched, 1);

    let load = &graph.node(&NodeId::from(NODE_A)).unwrap().data.input_data;
    assert_eq!(load[&InputId::new(0)], Some(InputValue::from("photos/cat.WEBP")));

    let save = &graph.node(&NodeId::from(NODE_B)).unwrap().data.input_data;
    assert_eq!(save[&InputId::new(4)], Some(InputValue::Number(80.0)));
    assert_eq!(save[&InputId::new(5)], None);
    assert_eq!(save[&InputId::new(1)], Some(InputValue::from("/out")));

    // The updated graph serializes back into the same shape.
    let reloaded = Graph::from_json(&serde_json::to_string(&graph).unwrap()).unwrap();
    assert_eq!(reloaded, graph);
}

#[test]
fn test_generic_input_cannot_be_overridden() {
    let (_, schemas) = DefinitionSet::from_json(DEFINITIONS_JSON).unwrap().into_parts();
    let mut graph = Graph::from_json(GRAPH_JSON).unwrap();
    let original = graph.clone();
    let overrides = override_file(&[(override_key(NODE_B, 0), serde_json::json!("image"))]);

    let result = apply_overrides(&overrides, &mut graph, &schemas);
    assert!(matches!(
        result,
        Err(OverrideError::UnsupportedKind { kind: "generic", .. })
    ));
    assert_eq!(graph, original);
}

#[test]
fn test_invalid_definitions_are_rejected() {
    let broken = DEFINITIONS_JSON.replace("\"groupLayout\": [0]", "\"groupLayout\": [0, 7]");
    assert!(matches!(
        DefinitionSet::from_json(&broken),
        Err(DefinitionError::Schema(SchemaError::UnknownLayoutInput { .. }))
    ));

    assert!(matches!(
        DefinitionSet::from_json("{ not json"),
        Err(DefinitionError::JsonParse(_))
    ));

    assert!(matches!(
        DefinitionSet::from_file("/definitely/not/here.json"),
        Err(DefinitionError::Io { .. })
    ));
}

#[test]
fn test_missing_override_file_is_a_format_error() {
    assert!(matches!(
        OverrideFile::from_file("/definitely/not/here.json"),
        Err(FormatError::InvalidOverrideFile(_))
    ));
}

#[test]
fn test_graph_loading_errors_are_typed() {
    assert!(matches!(
        Graph::from_json("{ \"nodes\": 3 }"),
        Err(GraphError::JsonParse(_))
    ));

    let err = Graph::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(&err, GraphError::Io { path, .. } if path == "/definitely/not/here.json"));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
