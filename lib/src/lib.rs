// lib/src/lib.rs
// Query engine for the in-memory property graph: index construction,
// bounded BFS traversal, and the search/expand operations consumed by
// the REST layer.

pub mod config;
pub mod engine;
pub mod session;

// Re-export the shared data model so hosts can depend on `lib` alone.
pub use models::{Direction, EdgeElement, Element, GraphError, MatchMode, NodeElement, SearchFilter};

// Explicit re-exports
pub use crate::engine::index::GraphIndex;
pub use crate::engine::query::{expand, search};
pub use crate::session::PendingExpansions;
