//! Source language identification
//!
//! The rewriter operates on JavaScript and TypeScript modules, with or
//! without JSX. The adapter picks the language from the file extension;
//! the rewriter maps it to a grammar.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumString};

/// Source language of a module under transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
pub enum SourceLanguage {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl SourceLanguage {
    /// Determine the language from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// Determine the language from a file path
    ///
    /// Returns None if the extension is missing or not supported
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|e| e.to_str())?;
        Self::from_extension(extension)
    }
}
