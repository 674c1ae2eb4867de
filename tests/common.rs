//! Common test utilities for building schemas, graphs and override files.
use settei::prelude::*;
use settei::schema::{DropdownOption, NumberConstraints};

#[allow(dead_code)]
pub const NODE_A: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
#[allow(dead_code)]
pub const NODE_B: &str = "9b2f0c1e-4d6a-4c3b-8e7f-0a1b2c3d4e5f";
#[allow(dead_code)]
pub const MISSING_NODE: &str = "00000000-0000-0000-0000-000000000000";

#[allow(dead_code)]
pub fn input(id: u32, label: &str, kind: InputKind) -> Input {
    Input {
        id: InputId::new(id),
        label: label.to_string(),
        kind,
        optional: false,
        description: None,
        has_handle: true,
    }
}

#[allow(dead_code)]
pub fn number_kind(min: Option<f64>, max: Option<f64>, precision: u32) -> InputKind {
    InputKind::Number {
        constraints: NumberConstraints {
            min,
            max,
            precision,
        },
        def: None,
        unit: None,
    }
}

#[allow(dead_code)]
pub fn text_kind(min_length: Option<usize>, max_length: Option<usize>) -> InputKind {
    InputKind::Text {
        min_length,
        max_length,
        multiline: false,
        placeholder: None,
        def: None,
    }
}

#[allow(dead_code)]
pub fn enum_condition(input: u32, values: &[&str]) -> Condition {
    Condition::Enum {
        input: InputId::new(input),
        values: values.iter().map(|v| InputValue::from(*v)).collect(),
    }
}

#[allow(dead_code)]
pub fn conditional(id: u32, condition: Condition, items: Vec<GroupItem>) -> GroupItem {
    GroupItem::Group(Box::new(Group {
        id: GroupId::new(id),
        kind: GroupKind::Conditional { condition },
        items,
    }))
}

#[allow(dead_code)]
pub fn item(id: u32) -> GroupItem {
    GroupItem::Input(InputId::new(id))
}

#[allow(dead_code)]
pub fn schema(schema_id: &str, inputs: Vec<Input>, group_layout: Vec<GroupItem>) -> NodeSchema {
    NodeSchema {
        schema_id: SchemaId::from(schema_id),
        name: schema_id.to_string(),
        category: CategoryId::from("image"),
        node_group: NodeGroupId::from("image/utility"),
        description: String::new(),
        see_also: vec![],
        icon: String::new(),
        inputs,
        outputs: vec![],
        group_layout,
        has_side_effects: false,
        deprecated: false,
        features: vec![],
    }
}

/// A schema exercising every overridable input kind.
///
/// 0: number [0, 100] integer, 1: slider [0, 1] two decimals, 2: text (2..=8 chars),
/// 3: file (.png/.jpg), 4: directory, 5: dropdown, 6: optional number.
#[allow(dead_code)]
pub fn create_override_schema() -> NodeSchema {
    let mut optional = input(6, "Seed", number_kind(None, None, 0));
    optional.optional = true;

    let inputs = vec![
        input(0, "Amount", number_kind(Some(0.0), Some(100.0), 0)),
        input(
            1,
            "Opacity",
            InputKind::Slider {
                constraints: NumberConstraints {
                    min: Some(0.0),
                    max: Some(1.0),
                    precision: 2,
                },
                def: Some(1.0),
                ends: None,
            },
        ),
        input(2, "Name", text_kind(Some(2), Some(8))),
        input(
            3,
            "Image",
            InputKind::File {
                filetypes: vec![".png".to_string(), ".jpg".to_string()],
            },
        ),
        input(4, "Directory", InputKind::Directory),
        input(
            5,
            "Mode",
            InputKind::Dropdown {
                options: vec![DropdownOption {
                    option: "Fast".to_string(),
                    value: InputValue::Number(0.0),
                }],
                def: None,
            },
        ),
        optional,
    ];
    let layout = (0..=6).map(item).collect();
    schema("test:override", inputs, layout)
}

#[allow(dead_code)]
pub fn create_schema_map() -> SchemaMap {
    SchemaMap::new(vec![create_override_schema()])
}

/// A graph with two nodes of the override schema and one edge between them.
#[allow(dead_code)]
pub fn create_graph() -> Graph {
    Graph {
        nodes: vec![
            GraphNode::new(NODE_A, "test:override")
                .with_input(InputId::new(0), 10.0)
                .with_input(InputId::new(2), "old"),
            GraphNode::new(NODE_B, "test:override").with_input(InputId::new(0), 20.0),
        ],
        edges: vec![GraphEdge {
            id: "edge-1".to_string(),
            source: NodeId::from(NODE_A),
            source_handle: format!("{}-0", NODE_A),
            target: NodeId::from(NODE_B),
            target_handle: format!("{}-0", NODE_B),
        }],
    }
}

#[allow(dead_code)]
pub fn override_key(node: &str, input: u32) -> String {
    format!("#{}:{}", node, input)
}

/// Builds an override file from `(key, json value)` pairs.
#[allow(dead_code)]
pub fn override_file(entries: &[(String, serde_json::Value)]) -> OverrideFile {
    let inputs: serde_json::Map<String, serde_json::Value> = entries.iter().cloned().collect();
    OverrideFile::from_json(&serde_json::json!({ "inputs": inputs }).to_string())
        .expect("override file fixture should parse")
}
