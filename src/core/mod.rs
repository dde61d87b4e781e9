// Core pipeline exports
pub mod prompt;
pub mod taxonomy;

pub use prompt::build_prompt;
pub use taxonomy::{render_taxonomy, TaxonomyEntry, TAXONOMY};
