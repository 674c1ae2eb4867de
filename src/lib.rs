//! # Settei - Node Schema Configuration Layer
//!
//! **Settei** is the configuration layer of a node-graph editor. It describes
//! every node type through an immutable [`NodeSchema`](schema::NodeSchema),
//! indexes categories for the node browser, resolves under which condition each
//! input of a schema is active, and applies override files onto the stored
//! input values of a loaded graph.
//!
//! ## Core Workflow
//!
//! 1.  **Load Definitions**: Parse the backend's definition set with
//!     `DefinitionSet::from_json` and split it into a `CategoryIndex` and a `SchemaMap`.
//! 2.  **Resolve Conditions**: Ask a `ConditionResolver` for the conditions of a
//!     schema to decide which inputs are active. Results are cached per schema object.
//! 3.  **Apply Overrides**: When a graph is loaded, parse its override file with
//!     `OverrideFile::from_json` and call `apply_overrides`. Either every override
//!     is applied or, on the first invalid one, none is.
//!
//! ## Quick Start
//!
//! ```rust
//! use settei::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let definitions = DefinitionSet::from_json(
//!         r#"{
//!             "categories": [],
//!             "schemas": [{
//!                 "schemaId": "demo:resize",
//!                 "name": "Resize",
//!                 "category": "image",
//!                 "nodeGroup": "image/transform",
//!                 "inputs": [
//!                     { "id": 0, "label": "Width", "kind": "number", "min": 1, "max": 8192, "precision": 0 }
//!                 ],
//!                 "outputs": [],
//!                 "groupLayout": [0]
//!             }]
//!         }"#,
//!     )?;
//!     let (_categories, schemas) = definitions.into_parts();
//!
//!     let node_id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
//!     let mut graph = Graph {
//!         nodes: vec![GraphNode::new(node_id, "demo:resize").with_input(InputId::new(0), 512.0)],
//!         edges: vec![],
//!     };
//!
//!     let overrides = OverrideFile::from_json(&format!(r##"{{ "inputs": {{ "#{}:0": 1024 }} }}"##, node_id))?;
//!     let report = apply_overrides(&overrides, &mut graph, &schemas)?;
//!
//!     assert_eq!(report.applied, 1);
//!     assert_eq!(
//!         graph.nodes[0].data.input_data[&InputId::new(0)],
//!         Some(InputValue::Number(1024.0))
//!     );
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod definitions;
pub mod error;
pub mod graph;
pub mod ids;
pub mod overrides;
pub mod prelude;
pub mod resolver;
pub mod schema;
