//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the settei crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use settei::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let (categories, schemas) = DefinitionSet::from_file("path/to/definitions.json")?.into_parts();
//! let mut graph = Graph::from_file("path/to/graph.json")?;
//! let overrides = OverrideFile::from_file("path/to/overrides.json")?;
//!
//! let report = apply_overrides(&overrides, &mut graph, &schemas)?;
//! println!("{} applied, {} unmatched", report.applied, report.unmatched);
//! println!("{} categories loaded", categories.len());
//! # Ok(())
//! # }
//! ```

// Definitions and indexes
pub use crate::category::{Category, CategoryIndex, NodeGroup};
pub use crate::definitions::DefinitionSet;

// Schema model
pub use crate::ids::{
    CategoryId, FeatureId, GroupId, InputId, NodeGroupId, NodeId, OutputId, SchemaId,
};
pub use crate::schema::{
    Condition, Group, GroupItem, GroupKind, Input, InputKind, InputValue, NodeSchema, Output,
    OutputKind, SchemaLookup, SchemaMap, TypeOracle,
};

// Condition resolution
pub use crate::resolver::{ConditionResolver, InputConditions, resolve_input_conditions};

// Graph and overrides
pub use crate::graph::{Graph, GraphEdge, GraphNode, NodeData};
pub use crate::overrides::{InputOverrideId, OverrideFile, OverrideReport, apply_overrides};

// Error types
pub use crate::error::{DefinitionError, FormatError, GraphError, OverrideError, SchemaError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
