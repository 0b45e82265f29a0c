//! All AI/LLM functionality

pub mod llama;
pub mod model;
pub mod validator;

// Re-export main types for convenience
pub use llama::{LlamaServerModel, load_model};
pub use model::{CompletionModel, CompletionParams};
