//! Document tree model for lectern.
//!
//! The selector engine never mutates a document; it reads elements through
//! the [`SelectableElement`] trait. Two trees implement it:
//!
//! - [`Element`] - a self-owned tree, each element owning its children.
//! - [`DomTree`] - an arena tree built by the markup parser, queried through
//!   [`NodeRef`] handles.
//!
//! # Design
//!
//! The arena stores all nodes in one vector and uses [`NodeId`] indices for
//! every relationship, giving O(1) access and traversal without borrow
//! checker issues. A query only needs `&DomTree`, so any number of queries
//! may share a tree while mutation requires `&mut DomTree`.

pub mod attributes;
pub mod element;
pub mod selectable;

use std::fmt;

pub use attributes::{Attribute, Attributes};
pub use element::Element;
pub use selectable::SelectableElement;

/// A type-safe index into the DOM tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node in the arena, with links to its parent, children and siblings.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub node_type: NodeType,

    /// The parent node, `None` for the document and detached nodes.
    pub parent: Option<NodeId>,

    /// Child nodes in document order.
    pub children: Vec<NodeId>,

    /// The node immediately following this one under the same parent.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one under the same parent.
    pub prev_sibling: Option<NodeId>,
}

/// The kind of a node.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The document root.
    Document,
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// Character data.
    Text(String),
    /// A `<!-- comment -->`.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// The element's local name.
    pub tag_name: String,
    /// The element's attributes, in source order.
    pub attrs: Attributes,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Attributes::new(),
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Returns the class names from the class attribute, in source order.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attrs
            .get("class")
            .map(|classlist| classlist.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector. The Document node is always at
/// index 0 ([`NodeId::ROOT`]).
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        Self {
            nodes: vec![document],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree, the Document included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it always holds at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Appends `child` as the last child of `parent`, updating all relationships.
    ///
    /// Ids that do not belong to this tree are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }

        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenation of every text node under `id`, in document order.
    ///
    /// Comments are skipped. For a text node this is the node's own data.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(text) = self.as_text(current) {
                out.push_str(text);
            }
            stack.extend(self.children(current).iter().rev());
        }
        out
    }

    /// The first element child of the Document (the `<html>` element for
    /// well-formed pages).
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// A queryable handle to a node of this tree.
    #[must_use]
    pub const fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// A queryable handle to the Document node.
    #[must_use]
    pub const fn root_ref(&self) -> NodeRef<'_> {
        self.node(NodeId::ROOT)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A node of a [`DomTree`] paired with the tree it lives in.
///
/// This is the handle type the selector engine works with for arena trees.
/// For the Document node and character data, [`tag_name`](SelectableElement::tag_name)
/// is empty and no attributes are reported.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// The node's index in its tree.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    #[must_use]
    pub const fn tree(&self) -> &'a DomTree {
        self.tree
    }

    /// Element data, if the node is an element.
    #[must_use]
    pub fn element(&self) -> Option<&'a ElementData> {
        self.tree.as_element(self.id)
    }

    /// All text under this node, see [`DomTree::text_content`].
    #[must_use]
    pub fn text_content(&self) -> String {
        self.tree.text_content(self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element() {
            Some(data) => write!(f, "NodeRef({}, <{}>)", self.id.0, data.tag_name),
            None => write!(f, "NodeRef({})", self.id.0),
        }
    }
}

impl<'a> SelectableElement for NodeRef<'a> {
    fn tag_name(&self) -> &str {
        self.element().map_or("", |data| data.tag_name.as_str())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.element().and_then(|data| data.attrs.get(name))
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .filter(move |&&id| tree.as_element(id).is_some())
            .map(move |&id| Self { tree, id })
    }
}
