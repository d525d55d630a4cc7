//! Core types for the gqlinline rewriter
//!
//! This crate provides the foundational abstractions shared by the
//! rewriter and the build-hook adapter:
//!
//! - **Options**: rewrite configuration with documented defaults
//! - **Artifact references**: deferred (module path) and immediate
//!   (in-memory document mapping) resolution forms
//! - **Source maps**: tracing rewritten output back to input positions
//! - **Error handling**: unified error types
//!

pub mod artifact;
pub mod error;
pub mod language;
pub mod options;
pub mod source_map;

// Re-export main types for convenience
pub use artifact::ArtifactReference;
pub use error::{Error, Result, ResultExt};
pub use language::SourceLanguage;
pub use options::RewriteOptions;
pub use source_map::{SegmentOrigin, SourceMap};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
