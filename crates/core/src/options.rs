//! Rewrite configuration
//!
//! The two call shapes the rewriter looks for are matched by bare
//! identifier name. Both names are configurable; the defaults follow
//! the conventional client-preset API (`graphql`, `useFragment`).

use serde::{Deserialize, Serialize};

fn default_definition_function() -> String {
    "graphql".to_string()
}

fn default_binding_function() -> String {
    "useFragment".to_string()
}

/// Configuration for one rewrite invocation
///
/// Matching is purely syntactic: a call matches when its callee is a
/// bare identifier equal to one of the configured names. Import
/// bindings are not resolved, so a local variable or function shadowing
/// a configured name is indistinguishable from the intended call. This
/// is a known limitation of name-based matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteOptions {
    /// Name of the query-definition function (default: "graphql")
    #[serde(default = "default_definition_function")]
    pub definition_function: String,

    /// Name of the fragment-binding function (default: "useFragment")
    #[serde(default = "default_binding_function")]
    pub binding_function: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            definition_function: default_definition_function(),
            binding_function: default_binding_function(),
        }
    }
}
