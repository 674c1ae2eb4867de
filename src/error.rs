use crate::ids::{InputId, NodeId, OutputId, SchemaId};
use std::fmt;
use thiserror::Error;

/// Errors raised for malformed override ids or override files.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("'{0}' is not a valid input override id")]
    InvalidOverrideId(String),

    #[error("Node id '{0}' must be exactly 36 characters long")]
    InvalidNodeId(String),

    #[error("Malformed override file: {0}")]
    InvalidOverrideFile(String),
}

/// The violated side of a bounded constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => write!(f, "minimum"),
            Bound::Max => write!(f, "maximum"),
        }
    }
}

/// Errors that abort the application of an override file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverrideError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Node '{node_id}' references the unknown schema '{schema_id}'")]
    SchemaLookup { node_id: NodeId, schema_id: SchemaId },

    #[error("Input {input_id} does not exist on node '{node_id}'")]
    UnknownInput { input_id: InputId, node_id: NodeId },

    #[error("Input {input_id} of node '{node_id}' is required and cannot be cleared")]
    RequiredInput { input_id: InputId, node_id: NodeId },

    #[error(
        "Input {input_id} of node '{node_id}' expects a {expected}, but the override is '{found}'"
    )]
    TypeMismatch {
        input_id: InputId,
        node_id: NodeId,
        expected: &'static str,
        found: String,
    },

    #[error(
        "Input {input_id} of node '{node_id}' expects a file with extension {accepted}, but the override is '{value}'"
    )]
    Extension {
        input_id: InputId,
        node_id: NodeId,
        value: String,
        accepted: String,
    },

    #[error("Input {input_id} of node '{node_id}' expects an integer, but the override is {value}")]
    IntegerRequired {
        input_id: InputId,
        node_id: NodeId,
        value: f64,
    },

    #[error(
        "Override {value} for input {input_id} of node '{node_id}' violates the {bound} of {limit}"
    )]
    Range {
        input_id: InputId,
        node_id: NodeId,
        value: f64,
        bound: Bound,
        limit: f64,
    },

    #[error(
        "Override for input {input_id} of node '{node_id}' has length {length}, which violates the {bound} length of {limit}"
    )]
    Length {
        input_id: InputId,
        node_id: NodeId,
        length: usize,
        bound: Bound,
        limit: usize,
    },

    #[error("Input {input_id} of node '{node_id}' is a '{kind}' input, which cannot be overridden")]
    UnsupportedKind {
        input_id: InputId,
        node_id: NodeId,
        kind: &'static str,
    },
}

/// Violations of the structural invariants of a `NodeSchema`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Schema '{schema_id}' defines input {input_id} more than once")]
    DuplicateInput {
        schema_id: SchemaId,
        input_id: InputId,
    },

    #[error("Schema '{schema_id}' defines output {output_id} more than once")]
    DuplicateOutput {
        schema_id: SchemaId,
        output_id: OutputId,
    },

    #[error("The group layout of schema '{schema_id}' references the unknown input {input_id}")]
    UnknownLayoutInput {
        schema_id: SchemaId,
        input_id: InputId,
    },

    #[error("The group layout of schema '{schema_id}' references input {input_id} more than once")]
    DuplicateLayoutInput {
        schema_id: SchemaId,
        input_id: InputId,
    },

    #[error("A condition in schema '{schema_id}' references the unknown input {input_id}")]
    UnknownConditionInput {
        schema_id: SchemaId,
        input_id: InputId,
    },
}

/// Errors that can occur while loading a definition set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    #[error("Failed to parse definitions JSON: {0}")]
    JsonParse(String),

    #[error("Could not read definitions file '{path}': {message}")]
    Io { path: String, message: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Errors that can occur while loading an editor graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParse(String),

    #[error("Could not read graph file '{path}': {message}")]
    Io { path: String, message: String },
}
