//! A minimal CSS selector engine.
//!
//! Selectors are whitespace-separated lists of simple tokens joined by the
//! descendant combinator. Supported forms are tag (`h3`), id (`div#main`),
//! class (`li.row`), attribute (`a[href^="http"]`) and wildcard (`*`).
//! There are no pseudo-classes, no child or sibling combinators and no
//! specificity.
//!
//! The engine is generic over [`SelectableElement`], so the same query runs
//! on a self-owned [`Element`](lectern_dom::Element) tree and on a parsed
//! [`DomTree`](lectern_dom::DomTree) through
//! [`NodeRef`](lectern_dom::NodeRef) handles.
//!
//! ```
//! use lectern_dom::{Element, SelectableElement};
//!
//! let doc = Element::new("body").with_child(
//!     Element::new("div").with_attr("id", "root").with_child(
//!         Element::new("ul")
//!             .with_attr("class", "item_section_list")
//!             .with_child(Element::new("li").with_attr("class", "row")),
//!     ),
//! );
//!
//! let rows = lectern_select::select(&doc, "#root ul.item_section_list li.row");
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].tag_name(), "li");
//! ```

/// Attribute tests and their operators.
pub mod attribute;
/// Query evaluation.
pub mod query;
/// Token classification.
pub mod token;

pub use attribute::{AttributeMatcher, AttributeOperator};
pub use lectern_common::SelectorError;
pub use lectern_dom::SelectableElement;
pub use query::{Descendants, Selector, select, select_from, try_select};
pub use token::SelectorToken;
