//! Resolution of per-input activation conditions from a schema's group layout.

mod cache;
mod conditions;

pub use cache::ConditionResolver;
pub use conditions::{InputConditions, resolve_input_conditions};
