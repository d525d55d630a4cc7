//! Call-site matching over the parsed program
//!
//! Walks the syntax tree depth-first in document order looking for the
//! two call shapes. Descent stops at a matched call: its whole text is
//! replaced as a unit, so children are never re-scanned for nested
//! matches.
//!
//! Matching is by bare callee identifier only. Import bindings are not
//! resolved (tree-sitter builds no symbol table), so a local shadowing
//! one of the configured names is matched all the same.

use gqlinline_core::RewriteOptions;
use tracing::debug;
use tree_sitter::Node;

use crate::document;

/// Byte span of a matched node in the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    fn of(node: Node) -> Self {
        Self {
            start: node.start_byte(),
            end: node.end_byte(),
        }
    }
}

/// A query-definition call whose embedded document parsed successfully
#[derive(Debug, Clone)]
pub struct DefinitionCall {
    pub span: Span,
    /// Exact source text of the whole call
    pub text: String,
    /// `<Name>Document` or `<Name>FragmentDoc`, from the document's
    /// first definition
    pub canonical_name: String,
    /// Whether the call's result initializes a variable declaration
    /// somewhere up the ancestor chain
    pub bound: bool,
}

/// A fragment-binding call with at least two arguments
#[derive(Debug, Clone)]
pub struct BindingCall {
    pub span: Span,
    /// Exact source text of the whole call
    pub text: String,
    /// Exact source text of the second argument
    pub value_text: String,
}

/// One matched call site, in document order
#[derive(Debug, Clone)]
pub enum CallSite {
    Definition(DefinitionCall),
    Binding(BindingCall),
}

/// Collect every matched call site under `root`, in document order
pub fn match_call_sites(root: Node, source: &str, options: &RewriteOptions) -> Vec<CallSite> {
    let mut sites = Vec::new();
    visit(root, source, options, &mut sites);
    sites
}

fn visit(node: Node, source: &str, options: &RewriteOptions, sites: &mut Vec<CallSite>) {
    if let Some(site) = classify(node, source, options) {
        sites.push(site);
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, options, sites);
    }
}

fn classify(node: Node, source: &str, options: &RewriteOptions) -> Option<CallSite> {
    if node.kind() != "call_expression" {
        return None;
    }
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "identifier" {
        return None;
    }

    let callee_name = node_text(callee, source)?;
    if callee_name == options.definition_function {
        classify_definition(node, source).map(CallSite::Definition)
    } else if callee_name == options.binding_function {
        classify_binding(node, source).map(CallSite::Binding)
    } else {
        None
    }
}

fn classify_definition(node: Node, source: &str) -> Option<DefinitionCall> {
    // Tagged templates carry a template_string in the arguments field;
    // only plain calls qualify
    let args = node.child_by_field_name("arguments")?;
    if args.kind() != "arguments" {
        return None;
    }

    let first = argument(args, 0)?;
    if first.kind() != "template_string" || has_substitutions(first) {
        return None;
    }

    let contents = template_contents(first, source)?;
    if contents.is_empty() {
        return None;
    }

    let Some(canonical_name) = document::canonical_document_name(contents) else {
        debug!("skipping definition call with uninterpretable document");
        return None;
    };

    Some(DefinitionCall {
        span: Span::of(node),
        text: node_text(node, source)?.to_string(),
        canonical_name,
        bound: is_bound(node),
    })
}

fn classify_binding(node: Node, source: &str) -> Option<BindingCall> {
    let args = node.child_by_field_name("arguments")?;
    if args.kind() != "arguments" {
        return None;
    }

    // Calls with fewer than two arguments are left alone
    let second = argument(args, 1)?;

    Some(BindingCall {
        span: Span::of(node),
        text: node_text(node, source)?.to_string(),
        value_text: node_text(second, source)?.to_string(),
    })
}

fn node_text<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    node.utf8_text(source.as_bytes()).ok()
}

/// Nth argument of an `arguments` node, skipping interleaved comments
fn argument(args: Node, index: usize) -> Option<Node> {
    let mut cursor = args.walk();
    let result = args
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .nth(index);
    result
}

fn has_substitutions(template: Node) -> bool {
    let mut cursor = template.walk();
    let result = template
        .named_children(&mut cursor)
        .any(|child| child.kind() == "template_substitution");
    result
}

/// Raw template text between the backticks, uninterpreted
fn template_contents<'a>(template: Node, source: &'a str) -> Option<&'a str> {
    node_text(template, source)?
        .strip_prefix('`')?
        .strip_suffix('`')
}

fn is_bound(node: Node) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if matches!(
            ancestor.kind(),
            "lexical_declaration" | "variable_declaration"
        ) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}
