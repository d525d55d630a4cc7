//! Source-to-source rewriter for GraphQL codegen call sites
//!
//! Locates query-definition calls (`graphql(...)`) and fragment-binding
//! calls (`useFragment(...)`) in a JavaScript/TypeScript module and
//! replaces them with direct references to precompiled artifacts. The
//! pass is a pure function of its inputs: parse, match, plan, emit.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod document;
mod emitter;
mod grammar;
mod matcher;

pub use emitter::RewriteOutput;
pub use matcher::{BindingCall, CallSite, DefinitionCall, Span};

use gqlinline_core::{ArtifactReference, Result, RewriteOptions, SourceLanguage};
use tracing::debug;

/// Rewrite one module
///
/// Matched query-definition calls bound to a variable become aliased
/// references to the precompiled document, with the alias imported or
/// declared in a prologue; unbound ones are removed. Fragment-binding
/// calls collapse to their second argument. Everything else passes
/// through untouched, and the returned source map traces every output
/// position back to the input.
///
/// Fails when the artifact mapping is missing a referenced document
/// name; malformed call sites are skipped, not errors.
pub fn rewrite(
    source: &str,
    language: SourceLanguage,
    artifact: &ArtifactReference,
    options: &RewriteOptions,
) -> Result<RewriteOutput> {
    let tree = grammar::parse_program(source, language)?;
    let sites = matcher::match_call_sites(tree.root_node(), source, options);
    debug!(matches = sites.len(), "planning rewrites");
    emitter::emit(source, &sites, artifact)
}
