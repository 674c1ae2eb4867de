use crate::ids::{CategoryId, NodeGroupId, SchemaId};
use crate::schema::NodeSchema;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A top-level bucket of the node browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub groups: Vec<NodeGroup>,
}

/// A named sub-bucket within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGroup {
    pub id: NodeGroupId,
    pub category: CategoryId,
    pub name: String,
    /// Explicit display order. Schemas not listed here follow alphabetically.
    #[serde(default)]
    pub order: Vec<SchemaId>,
}

impl NodeGroup {
    /// Sorts schemas for display: first the ones listed in `order`, in that
    /// order, then every other schema alphabetically by name.
    pub fn sort_schemas<'a>(
        &self,
        schemas: impl IntoIterator<Item = &'a NodeSchema>,
    ) -> Vec<&'a NodeSchema> {
        let positions: AHashMap<&SchemaId, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(index, id)| (id, index))
            .collect();

        let mut sorted: Vec<&'a NodeSchema> = schemas.into_iter().collect();
        sorted.sort_by(|a, b| {
            let pa = positions.get(&a.schema_id).copied().unwrap_or(usize::MAX);
            let pb = positions.get(&b.schema_id).copied().unwrap_or(usize::MAX);
            pa.cmp(&pb).then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }
}
