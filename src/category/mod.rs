pub mod index;
pub mod model;

pub use index::*;
pub use model::*;
