use super::group::collect_inputs;
use super::{Condition, GroupItem, GroupKind, Input, Output};
use crate::error::SchemaError;
use crate::ids::{CategoryId, FeatureId, InputId, NodeGroupId, SchemaId};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// The immutable definition of one node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSchema {
    pub schema_id: SchemaId,
    pub name: String,
    pub category: CategoryId,
    pub node_group: NodeGroupId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub see_also: Vec<SchemaId>,
    #[serde(default)]
    pub icon: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    #[serde(default)]
    pub group_layout: Vec<GroupItem>,
    #[serde(default)]
    pub has_side_effects: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub features: Vec<FeatureId>,
}

impl NodeSchema {
    /// Finds the input definition with the given id.
    pub fn input(&self, id: InputId) -> Option<&Input> {
        self.inputs.iter().find(|input| input.id == id)
    }

    /// Checks the structural invariants of the schema.
    ///
    /// Input and output ids must be unique, every input referenced by the group
    /// layout must be defined and referenced at most once, and every condition
    /// may only reference defined inputs.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut input_ids = AHashSet::new();
        for input in &self.inputs {
            if !input_ids.insert(input.id) {
                return Err(SchemaError::DuplicateInput {
                    schema_id: self.schema_id.clone(),
                    input_id: input.id,
                });
            }
        }

        let mut output_ids = AHashSet::new();
        for output in &self.outputs {
            if !output_ids.insert(output.id) {
                return Err(SchemaError::DuplicateOutput {
                    schema_id: self.schema_id.clone(),
                    output_id: output.id,
                });
            }
        }

        let mut layout_inputs = Vec::new();
        collect_inputs(&self.group_layout, &mut layout_inputs);
        let mut seen = AHashSet::new();
        for id in layout_inputs {
            if !input_ids.contains(&id) {
                return Err(SchemaError::UnknownLayoutInput {
                    schema_id: self.schema_id.clone(),
                    input_id: id,
                });
            }
            if !seen.insert(id) {
                return Err(SchemaError::DuplicateLayoutInput {
                    schema_id: self.schema_id.clone(),
                    input_id: id,
                });
            }
        }

        let mut referenced = BTreeSet::new();
        for condition in layout_conditions(&self.group_layout) {
            condition.referenced_inputs(&mut referenced);
        }
        if let Some(id) = referenced.into_iter().find(|id| !input_ids.contains(id)) {
            return Err(SchemaError::UnknownConditionInput {
                schema_id: self.schema_id.clone(),
                input_id: id,
            });
        }

        Ok(())
    }
}

/// Every condition carried by a group of the layout tree.
fn layout_conditions(items: &[GroupItem]) -> Vec<&Condition> {
    let mut conditions = Vec::new();
    let mut stack: Vec<&[GroupItem]> = vec![items];
    while let Some(items) = stack.pop() {
        for item in items {
            if let GroupItem::Group(group) = item {
                match &group.kind {
                    GroupKind::Conditional { condition }
                    | GroupKind::Required {
                        condition: Some(condition),
                    } => conditions.push(condition),
                    GroupKind::Required { condition: None }
                    | GroupKind::Seed
                    | GroupKind::IconSet { .. }
                    | GroupKind::FromToDropdowns
                    | GroupKind::LinkedInputs
                    | GroupKind::OptionalList
                    | GroupKind::MenuIconRow
                    | GroupKind::NcnnFileInputs => {}
                }
                stack.push(&group.items);
            }
        }
    }
    conditions
}

/// Read access to node schemas by id.
pub trait SchemaLookup {
    fn get_schema(&self, id: &SchemaId) -> Option<&NodeSchema>;
}

impl SchemaLookup for AHashMap<SchemaId, NodeSchema> {
    fn get_schema(&self, id: &SchemaId) -> Option<&NodeSchema> {
        self.get(id)
    }
}

/// All schemas of a session, shared so the condition resolver can key its cache
/// on schema identity.
#[derive(Debug, Clone, Default)]
pub struct SchemaMap {
    schemas: Vec<Arc<NodeSchema>>,
    by_id: AHashMap<SchemaId, usize>,
}

impl SchemaMap {
    pub fn new(schemas: impl IntoIterator<Item = NodeSchema>) -> Self {
        let mut map = Self::default();
        for schema in schemas {
            map.insert(schema);
        }
        map
    }

    /// Adds a schema, replacing any schema with the same id.
    pub fn insert(&mut self, schema: NodeSchema) {
        let schema = Arc::new(schema);
        match self.by_id.get(&schema.schema_id) {
            Some(&index) => self.schemas[index] = schema,
            None => {
                self.by_id.insert(schema.schema_id.clone(), self.schemas.len());
                self.schemas.push(schema);
            }
        }
    }

    /// The shared handle of a schema, for use with `ConditionResolver`.
    pub fn get_shared(&self, id: &SchemaId) -> Option<&Arc<NodeSchema>> {
        self.by_id.get(id).map(|&index| &self.schemas[index])
    }

    /// All schemas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<NodeSchema>> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaLookup for SchemaMap {
    fn get_schema(&self, id: &SchemaId) -> Option<&NodeSchema> {
        self.get_shared(id).map(|schema| schema.as_ref())
    }
}
