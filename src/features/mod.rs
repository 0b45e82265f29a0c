pub mod fallback;
pub mod summarize;

pub use summarize::Summarizer;
