//! Node schema definitions: inputs, outputs, the group layout tree and the
//! conditions attached to it.

pub mod condition;
pub mod group;
pub mod input;
pub mod node;
pub mod value;

pub use condition::*;
pub use group::{Group, GroupItem, GroupKind};
pub use input::*;
pub use node::*;
pub use value::*;
