use super::InputOverrideId;
use crate::error::FormatError;
use crate::schema::InputValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// An override file: `{ "inputs"?: { "<InputOverrideId>": string | number | null } }`.
///
/// Keys are kept verbatim and only validated when the file is applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverrideFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<BTreeMap<String, Option<InputValue>>>,
}

impl OverrideFile {
    /// Parses an override file. The top-level value must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| FormatError::InvalidOverrideFile(e.to_string()))?;
        if !value.is_object() {
            return Err(FormatError::InvalidOverrideFile(
                "the top-level value must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| FormatError::InvalidOverrideFile(e.to_string()))
    }

    /// Reads and parses an override file.
    pub fn from_file(path: &str) -> Result<Self, FormatError> {
        let content = fs::read_to_string(path).map_err(|e| {
            FormatError::InvalidOverrideFile(format!("Could not read '{}': {}", path, e))
        })?;
        Self::from_json(&content)
    }

    /// Adds an override, replacing an earlier one for the same input.
    pub fn insert(&mut self, id: &InputOverrideId, value: Option<InputValue>) {
        self.inputs
            .get_or_insert_with(BTreeMap::new)
            .insert(id.to_string(), value);
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FormatError::InvalidOverrideFile(e.to_string()))
    }

    /// Number of override entries.
    pub fn len(&self) -> usize {
        self.inputs.as_ref().map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
