use crate::error::GraphError;
use crate::ids::{InputId, NodeId, SchemaId};
use crate::schema::InputValue;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Editor-side data of a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub schema_id: SchemaId,
    /// Stored input values. `None` marks a cleared value.
    #[serde(default)]
    pub input_data: AHashMap<InputId, Option<InputValue>>,
}

/// A node placed in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub data: NodeData,
}

impl GraphNode {
    pub fn new(id: impl Into<NodeId>, schema_id: impl Into<SchemaId>) -> Self {
        Self {
            id: id.into(),
            data: NodeData {
                schema_id: schema_id.into(),
                input_data: AHashMap::new(),
            },
        }
    }

    /// Sets a stored input value, returning the node for chaining.
    pub fn with_input(mut self, input: InputId, value: impl Into<InputValue>) -> Self {
        self.data.input_data.insert(input, Some(value.into()));
        self
    }
}

/// A connection from an output handle of one node to an input handle of another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: NodeId,
    pub source_handle: String,
    pub target: NodeId,
    pub target_handle: String,
}

/// The nodes and edges of an editor graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::JsonParse(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, GraphError> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }
}
