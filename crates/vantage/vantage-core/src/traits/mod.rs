//! Collaborator interfaces. The engine consumes these; it never implements
//! fetching, persistence, or language understanding itself.

pub mod interpreter;
pub mod item_source;
pub mod pattern_store;

pub use interpreter::{SemanticInterpreter, TextCompletion};
pub use item_source::ItemSource;
pub use pattern_store::PatternStore;
