//! Module filtering and artifact loading around the rewriter
//!
//! Mirrors what a bundler transform hook does per module: check the id
//! against include/exclude patterns, bail cheaply when neither
//! configured function name occurs in the text, then hand the module to
//! the rewriter.

use std::fs;
use std::path::Path;

use glob::Pattern;
use tracing::debug;

use gqlinline_core::{ArtifactReference, Error, Result, ResultExt, RewriteOptions, SourceLanguage};
use gqlinline_rewriter::{rewrite, RewriteOutput};

/// Include/exclude file-pattern filter deciding which modules the
/// rewriter sees at all
#[derive(Debug, Clone)]
pub struct ModuleFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

const DEFAULT_INCLUDE: &[&str] = &["**/*.ts", "**/*.tsx"];
const DEFAULT_EXCLUDE: &[&str] = &["**/node_modules/**"];

impl ModuleFilter {
    /// Defaults: include `**/*.ts` and `**/*.tsx`, exclude anything
    /// under node_modules
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = if include.is_empty() {
            parse_patterns(DEFAULT_INCLUDE)?
        } else {
            parse_patterns(include)?
        };
        let exclude = if exclude.is_empty() {
            parse_patterns(DEFAULT_EXCLUDE)?
        } else {
            parse_patterns(exclude)?
        };

        Ok(Self { include, exclude })
    }

    /// Whether the module id passes the include/exclude patterns
    pub fn matches(&self, path: &Path) -> bool {
        self.include.iter().any(|p| p.matches_path(path))
            && !self.exclude.iter().any(|p| p.matches_path(path))
    }
}

fn parse_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            Pattern::new(raw).map_err(|e| Error::invalid_input(format!("bad pattern {raw}: {e}")))
        })
        .collect()
}

/// Cheap textual pre-filter: is there any occurrence of `name(` at all?
fn has_function_call(source: &str, name: &str) -> bool {
    source.contains(&format!("{name}("))
}

/// Load the artifact reference for this build
///
/// The directory form defers resolution to an import in the rewritten
/// code. When a manifest path is given (the production-build path), the
/// name-to-document mapping is loaded up front and documents are
/// inlined instead.
pub fn load_artifact(directory: &str, manifest: Option<&Path>) -> Result<ArtifactReference> {
    match manifest {
        None => Ok(ArtifactReference::Directory(directory.to_string())),
        Some(path) => {
            let text = fs::read_to_string(path)
                .context(format!("failed to read manifest {}", path.display()))?;
            ArtifactReference::documents_from_json(&text)
        }
    }
}

/// Transform one module, or pass it through
///
/// Returns Ok(None) when the module is skipped: unsupported extension,
/// or no textual occurrence of either configured function call.
pub fn transform_module(
    path: &Path,
    source: &str,
    artifact: &ArtifactReference,
    options: &RewriteOptions,
) -> Result<Option<RewriteOutput>> {
    let Some(language) = SourceLanguage::from_path(path) else {
        debug!(path = %path.display(), "unsupported extension, skipping");
        return Ok(None);
    };

    if !has_function_call(source, &options.definition_function)
        && !has_function_call(source, &options.binding_function)
    {
        debug!(path = %path.display(), "no candidate calls, skipping");
        return Ok(None);
    }

    rewrite(source, language, artifact, options)
        .map(Some)
        .context(format!("failed to transform {}", path.display()))
}
