//! Diversity selector: one best pattern per semantic category, then by score.

pub mod categories;
pub mod diversity;

pub use categories::{classify, SemanticCategory};
pub use diversity::{select_diverse, DiversitySelector};
