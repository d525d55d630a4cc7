//! Artifact references
//!
//! The codegen step that runs before the build produces precompiled
//! documents. The rewriter consumes them in one of two forms: a module
//! path the rewritten code re-imports from (deferred resolution), or an
//! in-memory name-to-document mapping whose entries are inlined as
//! literals (immediate resolution).

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Error, Result};

/// Conventional subpath of the generated document module inside an
/// artifact directory
const DOCUMENT_MODULE_SUBPATH: &str = "graphql";

/// Reference to the precompiled codegen output, supplied once per
/// invocation and read-only
#[derive(Debug, Clone)]
pub enum ArtifactReference {
    /// Path to the artifact directory; referenced documents are
    /// re-imported from its generated document module at build time
    Directory(String),

    /// Name-to-document mapping; referenced documents are serialized
    /// inline. Every referenced name must be present.
    Documents(HashMap<String, Value>),
}

impl ArtifactReference {
    /// Build the immediate-resolution form from a JSON manifest
    pub fn documents_from_json(manifest: &str) -> Result<Self> {
        let documents: HashMap<String, Value> = serde_json::from_str(manifest)
            .map_err(|e| Error::artifact_manifest(format!("invalid manifest JSON: {e}")))?;
        Ok(Self::Documents(documents))
    }

    /// Module path the deferred-resolution import is drawn from
    pub fn document_module_path(directory: &str) -> String {
        format!(
            "{}/{DOCUMENT_MODULE_SUBPATH}",
            directory.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_module_path() {
        assert_eq!(
            ArtifactReference::document_module_path("./src/__generated__"),
            "./src/__generated__/graphql"
        );
        assert_eq!(
            ArtifactReference::document_module_path("./gen/"),
            "./gen/graphql"
        );
    }

    #[test]
    fn test_documents_from_json() {
        let artifact = ArtifactReference::documents_from_json(
            r#"{"UsersQueryDocument":{"kind":"Document"}}"#,
        )
        .expect("manifest should deserialize");
        match artifact {
            ArtifactReference::Documents(docs) => {
                assert!(docs.contains_key("UsersQueryDocument"));
            }
            ArtifactReference::Directory(_) => panic!("expected mapping form"),
        }
        assert!(ArtifactReference::documents_from_json("[1, 2]").is_err());
    }
}
