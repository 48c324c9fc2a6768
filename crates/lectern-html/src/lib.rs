//! Lenient HTML tokenizer and tree builder for lectern.
//!
//! # Scope
//!
//! This crate turns downloaded pages into a [`DomTree`] the selector engine
//! can query:
//! - **Tokenizer** ([`HtmlTokenizer`]): tags, attributes in all three
//!   quoting styles, comments, doctypes, raw-text elements and the common
//!   character references.
//! - **Tree builder** ([`TreeBuilder`]): stack of open elements, void
//!   elements, implied end tags for list items, paragraphs, options and
//!   table cells.
//!
//! Malformed input never fails. Problems are reported as [`ParseIssue`]s.
//!
//! ```
//! use lectern_dom::SelectableElement;
//!
//! let tree = lectern_html::parse_document("<ul><li>one<li>two</ul>");
//! let ul = tree.document_element().map(|id| tree.node(id));
//! assert_eq!(ul.map(|ul| ul.children().count()), Some(2));
//! ```

/// Markup tokenizer.
pub mod tokenizer;
/// Tree construction from tokens.
pub mod tree_builder;

use std::fmt::Write as _;

use lectern_dom::{DomTree, NodeId, NodeType};

pub use tokenizer::{HtmlTokenizer, Token, TokenizerState, decode_entities};
pub use tree_builder::{ParseIssue, TreeBuilder};

/// Tokenize and build a document in one step.
#[must_use]
pub fn parse_document(html: &str) -> DomTree {
    parse_document_with_issues(html).0
}

/// Like [`parse_document`], also returning the issues found while building.
#[must_use]
pub fn parse_document_with_issues(html: &str) -> (DomTree, Vec<ParseIssue>) {
    let mut tokenizer = HtmlTokenizer::new(html.to_string());
    tokenizer.run();
    let tokens = tokenizer.into_tokens();
    log::trace!("tokenized {} bytes into {} tokens", html.len(), tokens.len());
    TreeBuilder::new(tokens).run_with_issues()
}

/// Render the subtree rooted at `id` as an indented outline, one node per
/// line.
///
/// Spaces in text are shown as `·` and newlines as `\n` so whitespace-only
/// nodes stay visible.
#[must_use]
pub fn render_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![(id, 0_usize)];
    while let Some((current, indent)) = stack.pop() {
        let Some(node) = tree.get(current) else {
            continue;
        };
        let prefix = "  ".repeat(indent);
        let _ = match &node.node_type {
            NodeType::Document => writeln!(out, "{prefix}Document"),
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    writeln!(out, "{prefix}<{}>", data.tag_name)
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.to_string()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(out, "{prefix}\"{display}\"")
            }
            NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->"),
        };
        stack.extend(
            tree.children(current)
                .iter()
                .rev()
                .map(|&child| (child, indent + 1)),
        );
    }
    out
}
