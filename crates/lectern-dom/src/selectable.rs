//! The read-only element interface the selector engine is written against.

/// A handle to an element that selectors can be evaluated on.
///
/// Any document tree can be queried by implementing this trait for a cheap,
/// copyable handle type (a reference, or an arena index paired with the
/// arena). The engine only ever reads through it.
///
/// Children must be yielded in document order; descendant traversal is
/// built on top of [`children`](Self::children).
pub trait SelectableElement: Copy {
    /// The element's local name as stored in the tree.
    fn tag_name(&self) -> &str;

    /// The value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Whether the element carries the named attribute.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Child elements in document order. Non-element nodes are skipped.
    fn children(&self) -> impl Iterator<Item = Self>;

    /// Whether the element's tag equals `name`, ignoring ASCII case.
    fn has_tag(&self, name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(name)
    }
}
