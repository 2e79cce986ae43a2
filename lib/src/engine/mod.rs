pub mod index;
pub mod matching;
pub mod query;
pub mod traversal;

// Public re-exports
pub use index::GraphIndex;
pub use matching::node_matches;
pub use query::{expand, search};
pub use traversal::Collected;
