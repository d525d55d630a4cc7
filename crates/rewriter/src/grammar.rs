//! Grammar selection and program parsing

use gqlinline_core::{Error, Result, SourceLanguage};
use tree_sitter::{Parser, Tree};

fn grammar_for(language: SourceLanguage) -> tree_sitter::Language {
    match language {
        SourceLanguage::JavaScript | SourceLanguage::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        SourceLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse the module text with the grammar for `language`
pub(crate) fn parse_program(source: &str, language: SourceLanguage) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar_for(language))
        .map_err(|e| Error::parse(format!("failed to set {language} language: {e}")))?;

    parser
        .parse(source, None)
        .ok_or_else(|| Error::parse("failed to parse source code"))
}
