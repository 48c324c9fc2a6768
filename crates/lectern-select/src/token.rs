//! Selector tokens and their classification.
//!
//! A selector string is split on whitespace; each piece is one of five
//! simple forms, tried in this order:
//!
//! | form | example | meaning |
//! |---|---|---|
//! | attribute | `a[href^="http"]` | optional tag, attribute test |
//! | id | `div#main` | optional tag, `id` equal to the suffix |
//! | class | `li.row` | optional tag, class list containing the suffix |
//! | wildcard | `*` | any element |
//! | tag | `h3` | lower-case ASCII letters and digits |
//!
//! Anything else is invalid.

use core::fmt;

use lectern_dom::SelectableElement;

use crate::attribute::{AttributeMatcher, AttributeOperator};

/// Separates an optional tag prefix from an id.
pub const ID_SIGIL: char = '#';

/// Separates an optional tag prefix from a class name.
pub const CLASS_SIGIL: char = '.';

/// The token matching every element.
pub const WILDCARD: &str = "*";

/// Characters that may open the operator part of an attribute test.
pub const OPERATOR_SYMBOLS: [char; 6] = ['=', '~', '|', '^', '$', '*'];

/// `\w` in the attribute grammar: ASCII letters, digits and underscore.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The alphabet of a bare tag token.
const fn is_tag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// One classified, whitespace-free piece of a selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorToken {
    /// `tag?[name op value]`
    Attribute {
        /// Required tag, `None` for any.
        tag: Option<String>,
        /// The attribute test.
        matcher: AttributeMatcher,
    },

    /// `tag?#id`. Only the first matching descendant of the first context
    /// is kept, and a miss ends the whole query.
    Id {
        /// Required tag, `None` for any.
        tag: Option<String>,
        /// The `id` value to look for.
        id: String,
    },

    /// `tag?.class`
    Class {
        /// Required tag, `None` for any.
        tag: Option<String>,
        /// A single class name.
        class: String,
    },

    /// `*`
    Wildcard,

    /// A bare tag name.
    Tag(String),
}

/// Split `token` at the first `sigil` into an optional tag and the rest.
fn split_prefixed(token: &str, sigil: char) -> Option<(Option<String>, String)> {
    let (tag, rest) = token.split_once(sigil)?;
    let tag = (!tag.is_empty()).then(|| tag.to_string());
    Some((tag, rest.to_string()))
}

/// Parse `tag?[name op? =? "? value "?]`.
fn parse_attribute(token: &str) -> Option<(Option<String>, AttributeMatcher)> {
    let (tag, rest) = token.split_once('[')?;
    if !tag.chars().all(is_word_char) {
        return None;
    }

    let name_len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = rest.split_at(name_len);

    let body = rest.strip_suffix(']')?;
    if body.contains(']') {
        return None;
    }

    let symbol = body.chars().next().filter(|c| OPERATOR_SYMBOLS.contains(c));
    let body = symbol.map_or(body, |symbol| &body[symbol.len_utf8()..]);
    let body = body.strip_prefix('=').unwrap_or(body);
    let body = body.strip_prefix('"').unwrap_or(body);
    let value = body.strip_suffix('"').unwrap_or(body);
    if value.contains('"') {
        return None;
    }

    let operator = AttributeOperator::from_symbol(symbol, value)?;
    let tag = (!tag.is_empty()).then(|| tag.to_string());
    Some((tag, AttributeMatcher::new(name, operator)))
}

fn tag_matches<E: SelectableElement>(tag: Option<&str>, element: &E) -> bool {
    tag.is_none_or(|tag| element.has_tag(tag))
}

impl SelectorToken {
    /// Classify a single token. `None` means the token is invalid.
    ///
    /// ```
    /// use lectern_select::SelectorToken;
    ///
    /// assert_eq!(SelectorToken::classify("*"), Some(SelectorToken::Wildcard));
    /// assert_eq!(SelectorToken::classify("h3"), Some(SelectorToken::Tag("h3".into())));
    /// assert!(matches!(
    ///     SelectorToken::classify("ul.item_section_list"),
    ///     Some(SelectorToken::Class { .. })
    /// ));
    /// assert_eq!(SelectorToken::classify("H3"), None);
    /// ```
    #[must_use]
    pub fn classify(token: &str) -> Option<Self> {
        if let Some((tag, matcher)) = parse_attribute(token) {
            return Some(Self::Attribute { tag, matcher });
        }
        if let Some((tag, id)) = split_prefixed(token, ID_SIGIL) {
            return Some(Self::Id { tag, id });
        }
        if let Some((tag, class)) = split_prefixed(token, CLASS_SIGIL) {
            return Some(Self::Class { tag, class });
        }
        if token == WILDCARD {
            return Some(Self::Wildcard);
        }
        if !token.is_empty() && token.chars().all(is_tag_char) {
            return Some(Self::Tag(token.to_string()));
        }
        None
    }

    /// The tag this token requires, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Attribute { tag, .. } | Self::Id { tag, .. } | Self::Class { tag, .. } => {
                tag.as_deref()
            }
            Self::Wildcard => None,
            Self::Tag(tag) => Some(tag.as_str()),
        }
    }

    /// Whether a single element satisfies this token.
    ///
    /// Tags compare ignoring ASCII case; attribute names and values compare
    /// exactly.
    #[must_use]
    pub fn matches<E: SelectableElement>(&self, element: &E) -> bool {
        if !tag_matches(self.tag(), element) {
            return false;
        }
        match self {
            Self::Attribute { matcher, .. } => matcher.matches(element),
            Self::Id { id, .. } => element.attribute("id") == Some(id.as_str()),
            Self::Class { class, .. } => element
                .attribute("class")
                .is_some_and(|classes| classes.split_whitespace().any(|name| name == class)),
            Self::Wildcard | Self::Tag(_) => true,
        }
    }
}

impl fmt::Display for SelectorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag().unwrap_or_default();
        match self {
            Self::Attribute { matcher, .. } => write!(f, "{tag}{matcher}"),
            Self::Id { id, .. } => write!(f, "{tag}{ID_SIGIL}{id}"),
            Self::Class { class, .. } => write!(f, "{tag}{CLASS_SIGIL}{class}"),
            Self::Wildcard => f.write_str(WILDCARD),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}
