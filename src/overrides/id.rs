use crate::error::FormatError;
use crate::ids::{InputId, NodeId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a node id (a hyphenated UUID).
pub const NODE_ID_LENGTH: usize = 36;

/// The textual key naming one input of one node, `#<node-id>:<input-id>`.
///
/// The format is a compatibility contract for override files and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputOverrideId(String);

impl InputOverrideId {
    /// Builds the override id for `input_id` of the node `node_id`.
    ///
    /// Only the length of the node id is checked, not its UUID syntax.
    pub fn encode(node_id: &NodeId, input_id: InputId) -> Result<Self, FormatError> {
        if node_id.as_str().chars().count() != NODE_ID_LENGTH {
            return Err(FormatError::InvalidNodeId(node_id.to_string()));
        }
        Ok(Self(format!("#{}:{}", node_id, input_id)))
    }

    /// Whether `s` matches `#` + 36 chars of `[a-f0-9-]` + `:` + one or more digits.
    pub fn is_valid(s: &str) -> bool {
        let bytes = s.as_bytes();
        let digits_start = NODE_ID_LENGTH + 2;
        bytes.len() > digits_start
            && bytes[0] == b'#'
            && bytes[1..=NODE_ID_LENGTH]
                .iter()
                .all(|b| matches!(b, b'a'..=b'f' | b'0'..=b'9' | b'-'))
            && bytes[NODE_ID_LENGTH + 1] == b':'
            && bytes[digits_start..].iter().all(u8::is_ascii_digit)
    }

    /// Parses and validates an override id.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(FormatError::InvalidOverrideId(s.to_string()))
        }
    }

    /// Splits the id into the node id and the input id.
    ///
    /// `encode` only checks the node id length, so ids it produced from node ids
    /// outside the grammar are rejected here.
    pub fn decode(&self) -> Result<(NodeId, InputId), FormatError> {
        if !Self::is_valid(&self.0) {
            return Err(FormatError::InvalidOverrideId(self.0.clone()));
        }
        // The grammar only admits ASCII, so byte offsets are char offsets.
        let node_id = &self.0[1..=NODE_ID_LENGTH];
        let input_id = self.0[NODE_ID_LENGTH + 2..]
            .parse::<u32>()
            .map_err(|_| FormatError::InvalidOverrideId(self.0.clone()))?;
        Ok((NodeId::from(node_id), InputId::new(input_id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates `s` and splits it into its node id and input id.
pub fn decode_override_id(s: &str) -> Result<(NodeId, InputId), FormatError> {
    InputOverrideId::parse(s)?.decode()
}

impl FromStr for InputOverrideId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InputOverrideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for InputOverrideId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InputOverrideId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
