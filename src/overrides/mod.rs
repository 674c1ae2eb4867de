//! Input overrides: externally supplied values that replace the stored input
//! values of specific nodes when a graph is loaded.

pub mod apply;
pub mod file;
pub mod id;

pub use apply::*;
pub use file::*;
pub use id::*;
