//! Tree construction.
//!
//! Builds a [`DomTree`] from the token stream with a stack of open
//! elements. There are no insertion modes: no implied `html`/`head`/`body`,
//! no foster parenting and no adoption agency. Void elements, unclosed list
//! items and table cells, and stray end tags are handled.

use lectern_common::warning::warn_once;
use lectern_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::Token;

/// Elements that never have content.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A problem found while building the tree. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What went wrong.
    pub message: String,
    /// Index into the token stream where it happened.
    pub token_index: usize,
}

/// For a start tag that implicitly closes an open element of its own kind:
/// the tags it closes and the tags that bound the search.
fn implied_end(tag: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match tag {
        "li" => Some((&["li"], &["ul", "ol"])),
        "dt" | "dd" => Some((&["dt", "dd"], &["dl"])),
        "td" | "th" => Some((&["td", "th"], &["tr", "table"])),
        "tr" => Some((&["tr"], &["table", "tbody", "thead", "tfoot"])),
        "option" => Some((&["option"], &["select", "datalist"])),
        "p" => Some((&["p"], &["div", "body", "li", "td", "th", "section", "article"])),
        _ => None,
    }
}

/// Builds a [`DomTree`] from tokens produced by
/// [`HtmlTokenizer`](crate::HtmlTokenizer).
pub struct TreeBuilder {
    tokens: Vec<Token>,
    token_index: usize,
    tree: DomTree,
    /// Open elements, innermost last. The Document is implicit below it.
    stack_of_open_elements: Vec<NodeId>,
    issues: Vec<ParseIssue>,
}

impl TreeBuilder {
    /// Create a builder over a complete token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            token_index: 0,
            tree: DomTree::new(),
            stack_of_open_elements: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Build the tree, discarding issues.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Build the tree and return it together with every issue found.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for (index, token) in tokens.into_iter().enumerate() {
            self.token_index = index;
            self.process_token(token);
        }
        if let Some(&open) = self.stack_of_open_elements.last() {
            log::trace!(
                "{} element(s) still open at end of input, innermost {:?}",
                self.stack_of_open_elements.len(),
                self.tree.as_element(open).map(|data| data.tag_name.as_str())
            );
        }
        (self.tree, self.issues)
    }

    fn process_token(&mut self, token: Token) {
        match token {
            Token::Doctype(_) => {}
            Token::Comment(data) => {
                let id = self.tree.alloc(NodeType::Comment(data));
                self.tree.append_child(self.current_node(), id);
            }
            Token::Text(data) => self.insert_text(data),
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => self.insert_element(name, attributes, self_closing),
            Token::EndTag { name } => self.close_element(&name),
        }
    }

    /// The node new content is appended to.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn open_tag(&self, index: usize) -> &str {
        self.stack_of_open_elements
            .get(index)
            .and_then(|&id| self.tree.as_element(id))
            .map_or("", |data| data.tag_name.as_str())
    }

    /// Append text, merging it into a preceding text sibling.
    fn insert_text(&mut self, data: String) {
        let parent = self.current_node();
        if let Some(last) = self.tree.last_child(parent)
            && let Some(node) = self.tree.get_mut(last)
            && let NodeType::Text(existing) = &mut node.node_type
        {
            existing.push_str(&data);
            return;
        }
        let id = self.tree.alloc(NodeType::Text(data));
        self.tree.append_child(parent, id);
    }

    fn insert_element(&mut self, name: String, attributes: Vec<Attribute>, self_closing: bool) {
        self.close_implied(&name);

        let is_void = VOID_ELEMENTS.contains(&name.as_str());
        if self_closing && !is_void {
            log::debug!("self-closing <{name}/> treated as empty element");
        }

        let mut data = ElementData::new(name);
        for attr in attributes {
            let _ = data.attrs.insert(attr.name, attr.value);
        }
        let id = self.tree.alloc(NodeType::Element(data));
        self.tree.append_child(self.current_node(), id);

        if !is_void && !self_closing {
            self.stack_of_open_elements.push(id);
        }
    }

    /// Close an open element of the same kind as `tag` when the start of
    /// `tag` implies its end, e.g. `<li>` directly after an unclosed `<li>`.
    fn close_implied(&mut self, tag: &str) {
        let Some((closes, boundaries)) = implied_end(tag) else {
            return;
        };
        for index in (0..self.stack_of_open_elements.len()).rev() {
            let open = self.open_tag(index);
            if closes.contains(&open) {
                log::trace!("<{tag}> implicitly closes <{open}>");
                self.stack_of_open_elements.truncate(index);
                return;
            }
            if boundaries.contains(&open) {
                return;
            }
        }
    }

    fn close_element(&mut self, name: &str) {
        if VOID_ELEMENTS.contains(&name) {
            // `</br>` and friends carry no structure.
            return;
        }
        let matching =
            (0..self.stack_of_open_elements.len()).rfind(|&index| self.open_tag(index) == name);
        if let Some(index) = matching {
            self.stack_of_open_elements.truncate(index);
        } else {
            self.parse_issue(&format!("unmatched end tag </{name}> ignored"));
        }
    }

    fn parse_issue(&mut self, message: &str) {
        warn_once("HTML Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: self.token_index,
        });
    }
}
