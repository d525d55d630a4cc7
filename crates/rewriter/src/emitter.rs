//! Rewrite planning and emission
//!
//! Turns matched call sites into span-keyed edits plus an import or
//! declaration prologue, then splices everything into the final text
//! while recording the source map.

use gqlinline_core::{ArtifactReference, Error, Result, SegmentOrigin, SourceMap};
use tracing::debug;

use crate::matcher::CallSite;

/// Prefix decorating every imported or declared artifact binding. The
/// canonical name already disambiguates by source name, so the prefix
/// alone keeps synthesized bindings out of the module's namespace.
const ALIAS_PREFIX: &str = "_transformed_";

/// Rewritten module text plus its position mapping
#[derive(Debug, Clone)]
pub struct RewriteOutput {
    pub text: String,
    pub source_map: SourceMap,
}

/// A planned replacement, keyed by the matched node's byte span
///
/// Spans are keyed rather than matched by text so that byte-identical
/// duplicate call sites each rewrite in place. They never overlap:
/// descent stops at a matched call, so no two recorded calls nest.
#[derive(Debug)]
struct Edit {
    start: usize,
    end: usize,
    replacement: String,
}

/// A (canonical name, alias) pair to resolve against the artifact, in
/// first-discovered order
#[derive(Debug)]
struct ImportRequest {
    canonical_name: String,
    alias: String,
}

/// Plan edits for every matched call site and emit the final text
pub fn emit(
    source: &str,
    sites: &[CallSite],
    artifact: &ArtifactReference,
) -> Result<RewriteOutput> {
    let mut edits = Vec::new();
    let mut imports: Vec<ImportRequest> = Vec::new();

    for site in sites {
        match site {
            CallSite::Definition(call) => {
                if !call.bound {
                    // Discarded result: drop the call, import nothing
                    debug!(call = %call.text, "removing unbound definition call");
                    edits.push(Edit {
                        start: call.span.start,
                        end: call.span.end,
                        replacement: String::new(),
                    });
                    continue;
                }

                let alias = format!("{ALIAS_PREFIX}{}", call.canonical_name);
                edits.push(Edit {
                    start: call.span.start,
                    end: call.span.end,
                    replacement: alias.clone(),
                });
                if !imports
                    .iter()
                    .any(|request| request.canonical_name == call.canonical_name)
                {
                    imports.push(ImportRequest {
                        canonical_name: call.canonical_name.clone(),
                        alias,
                    });
                }
            }
            CallSite::Binding(call) => {
                // Parenthesized so the surrounding expression's
                // precedence survives whatever shape the argument has
                edits.push(Edit {
                    start: call.span.start,
                    end: call.span.end,
                    replacement: format!("({})", call.value_text),
                });
            }
        }
    }

    let prologue = resolve_imports(&imports, artifact)?;
    Ok(splice(source, &prologue, edits))
}

/// Resolve import requests into the prologue prepended to the module
fn resolve_imports(imports: &[ImportRequest], artifact: &ArtifactReference) -> Result<String> {
    if imports.is_empty() {
        return Ok(String::new());
    }

    match artifact {
        ArtifactReference::Directory(directory) => {
            let items = imports
                .iter()
                .map(|request| format!("{} as {}", request.canonical_name, request.alias))
                .collect::<Vec<_>>()
                .join(", ");
            let module_path = ArtifactReference::document_module_path(directory);
            Ok(format!("import {{ {items} }} from '{module_path}'\n"))
        }
        ArtifactReference::Documents(documents) => {
            let mut prologue = String::new();
            for request in imports {
                let value = documents.get(&request.canonical_name).ok_or_else(|| {
                    Error::artifact_lookup(request.canonical_name.clone())
                })?;
                let json = serde_json::to_string(value).map_err(|e| {
                    Error::artifact_manifest(format!(
                        "failed to serialize document {}: {e}",
                        request.canonical_name
                    ))
                })?;
                prologue.push_str(&format!("const {} = {json}\n", request.alias));
            }
            Ok(prologue)
        }
    }
}

/// Apply the prologue and every edit against the original text,
/// recording where each output byte came from
fn splice(source: &str, prologue: &str, mut edits: Vec<Edit>) -> RewriteOutput {
    edits.sort_by_key(|edit| edit.start);

    let mut text = String::with_capacity(prologue.len() + source.len());
    let mut map = SourceMap::new();

    text.push_str(prologue);
    map.append(prologue.len(), SegmentOrigin::Synthesized);

    let mut cursor = 0;
    for edit in &edits {
        text.push_str(&source[cursor..edit.start]);
        map.append(edit.start - cursor, SegmentOrigin::Original(cursor));

        text.push_str(&edit.replacement);
        map.append(edit.replacement.len(), SegmentOrigin::Synthesized);

        cursor = edit.end;
    }
    text.push_str(&source[cursor..]);
    map.append(source.len() - cursor, SegmentOrigin::Original(cursor));

    RewriteOutput {
        text,
        source_map: map,
    }
}
