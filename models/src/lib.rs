// models/src/lib.rs

pub mod elements;
pub mod errors;
pub mod filters;

// Public re-exports
pub use elements::{EdgeElement, Element, NodeElement};
pub use errors::{GraphError, GraphResult};
pub use filters::{Direction, MatchMode, SearchFilter};
