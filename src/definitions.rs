use crate::category::{Category, CategoryIndex};
use crate::error::DefinitionError;
use crate::schema::{NodeSchema, SchemaMap};
use serde::{Deserialize, Serialize};
use std::fs;

/// The node definitions supplied by the backend at session start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionSet {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub schemas: Vec<NodeSchema>,
}

impl DefinitionSet {
    /// Parses a definition set and validates every schema in it.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definitions: Self =
            serde_json::from_str(json).map_err(|e| DefinitionError::JsonParse(e.to_string()))?;
        definitions.validate()?;
        Ok(definitions)
    }

    /// Loads a definition set from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DefinitionError> {
        let content = fs::read_to_string(path).map_err(|e| DefinitionError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        for schema in &self.schemas {
            schema.validate()?;
        }
        Ok(())
    }

    /// Splits the set into the category index and the schema map.
    pub fn into_parts(self) -> (CategoryIndex, SchemaMap) {
        let index = CategoryIndex::new(&self.categories);
        (index, SchemaMap::new(self.schemas))
    }
}
