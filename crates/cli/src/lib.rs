//! gqlinline CLI - build-hook adapter for the rewriter
//!
//! The rewriter itself is a pure function; this crate supplies the glue
//! a build pipeline needs around it: deciding which modules to touch,
//! loading the artifact reference, and shuttling text in and out.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod adapter;

pub use adapter::{load_artifact, transform_module, ModuleFilter};
