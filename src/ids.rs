//! Nominal identifier types.
//!
//! Every identifier is a distinct type even when two of them share the same
//! primitive representation, so an `OutputId` can never be passed where an
//! `InputId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines numeric identifier newtypes.
macro_rules! define_numeric_ids {
    ( $( $(#[$meta:meta])* $name:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub u32);

            impl $name {
                pub const fn new(id: u32) -> Self {
                    Self(id)
                }

                pub const fn get(self) -> u32 {
                    self.0
                }
            }

            impl From<u32> for $name {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

/// Defines string identifier newtypes.
macro_rules! define_string_ids {
    ( $( $(#[$meta:meta])* $name:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $name {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }

            impl From<String> for $name {
                fn from(id: String) -> Self {
                    Self(id)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

define_numeric_ids! {
    /// Identifies an input within one schema. Not globally unique.
    InputId,
    /// Identifies an output within one schema. Not globally unique.
    OutputId,
    /// Identifies a group within one schema's layout tree.
    GroupId,
}

define_string_ids! {
    /// Identifies a node type, e.g. `"chainner:image:load"`.
    SchemaId,
    /// Identifies a top-level category of the node browser.
    CategoryId,
    /// Identifies a node group inside a category.
    NodeGroupId,
    /// Identifies an optional backend feature a schema depends on.
    FeatureId,
    /// Identifies a node placed in a graph. Usually a 36 character UUID.
    NodeId,
}
