//! Local Summarizer - a privacy-first HTTP service that condenses text on the
//! local machine.
//!
//! Content is summarized by an on-device language model when one is
//! available and by an extractive heuristic otherwise, so callers always get
//! a usable summary and no text ever leaves the machine.
//!
//! # Architecture
//!
//! The system uses:
//! - axum and tower-http for the HTTP endpoint (CORS, request tracing)
//! - a llama.cpp-compatible completion server as the optional model
//! - reqwest for talking to that server
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use local_summarizer::core::models::SummarizationRequest;
//! use local_summarizer::features::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     local_summarizer::setup_logging();
//!
//!     // No model: every request takes the extractive path.
//!     let summarizer = Summarizer::new(None);
//!     let request = SummarizationRequest::new(
//!         "Rust guarantees memory safety without a garbage collector. \
//!          Ownership rules are checked at compile time by the borrow checker.",
//!     )
//!     .with_max_length(20);
//!
//!     let result = summarizer.summarize(&request).await?;
//!     println!("{} ({})", result.summary, result.method);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod utils;

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// local_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
