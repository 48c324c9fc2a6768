//! A self-owned element tree.
//!
//! Each [`Element`] exclusively owns its children; there are no parent
//! links. This is the simplest tree that satisfies [`SelectableElement`]
//! and is convenient for building documents by hand.

use crate::SelectableElement;
use crate::attributes::Attributes;

/// An element with a tag name, ordered attributes and owned children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// The element's local name.
    pub tag_name: String,
    /// The element's attributes.
    pub attrs: Attributes,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attrs.insert(name, value);
        self
    }

    /// Builder-style child appender.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style appender for several children at once.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Drop for Element {
    /// Unlinks descendants one at a time so deep trees drop without
    /// recursion.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

impl<'a> SelectableElement for &'a Element {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let element: &'a Element = *self;
        element.children.iter()
    }
}
