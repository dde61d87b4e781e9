// Service exports
pub mod completion;

pub use completion::{ClassifyError, CompletionClient};
