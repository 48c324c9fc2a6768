//! Query evaluation: narrowing a candidate set token by token.

use core::fmt;
use core::str::FromStr;

use lectern_common::SelectorError;
use lectern_dom::SelectableElement;

use crate::token::SelectorToken;

/// Depth-first, document-order iterator over the descendants of an element,
/// the element itself excluded.
///
/// Uses an explicit stack, so arbitrarily deep documents are fine.
pub struct Descendants<E> {
    stack: Vec<E>,
}

impl<E: SelectableElement> Descendants<E> {
    /// Start below `root`.
    #[must_use]
    pub fn new(root: E) -> Self {
        let mut stack: Vec<E> = root.children().collect();
        stack.reverse();
        Self { stack }
    }
}

impl<E: SelectableElement> Iterator for Descendants<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let next = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(next.children());
        self.stack[start..].reverse();
        Some(next)
    }
}

/// A parsed selector: an ordered list of tokens joined by the descendant
/// combinator.
///
/// Parse once and evaluate many times:
///
/// ```
/// use lectern_dom::Element;
/// use lectern_select::Selector;
///
/// let doc = Element::new("div").with_child(
///     Element::new("ul")
///         .with_attr("class", "item_section_list")
///         .with_child(Element::new("li")),
/// );
/// let selector: Selector = "ul.item_section_list li".parse()?;
/// assert_eq!(selector.select(&doc).len(), 1);
/// # Ok::<(), lectern_common::SelectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tokens: Vec<SelectorToken>,
}

impl Selector {
    /// Parse a whitespace-separated selector string.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidToken`] for the first token that is
    /// none of the supported forms.
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let tokens = selector
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                SelectorToken::classify(token).ok_or_else(|| SelectorError::InvalidToken {
                    token: token.to_string(),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }

    /// The classified tokens, in order.
    #[must_use]
    pub fn tokens(&self) -> &[SelectorToken] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the selector has no tokens (and so selects its seed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Evaluate against the subtree of `root`.
    #[must_use]
    pub fn select<E: SelectableElement>(&self, root: E) -> Vec<E> {
        self.select_from(&[root])
    }

    /// Evaluate starting from an existing candidate set.
    ///
    /// Each token replaces the candidates with the matching descendants of
    /// every candidate, in candidate order. Overlapping candidates yield
    /// duplicates. An id token only searches the first candidate and empties
    /// the whole result when nothing matches.
    #[must_use]
    pub fn select_from<E: SelectableElement>(&self, contexts: &[E]) -> Vec<E> {
        let mut candidates = contexts.to_vec();
        for token in &self.tokens {
            if candidates.is_empty() {
                break;
            }
            candidates = match token {
                SelectorToken::Id { .. } => {
                    let found = candidates.first().and_then(|&context| {
                        Descendants::new(context).find(|element| token.matches(element))
                    });
                    let Some(found) = found else {
                        log::trace!("no element for `{token}`, query abandoned");
                        return Vec::new();
                    };
                    vec![found]
                }
                _ => candidates
                    .iter()
                    .flat_map(move |&context| {
                        Descendants::new(context).filter(move |element| token.matches(element))
                    })
                    .collect(),
            };
        }
        candidates
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}


/// Run `selector` against the subtree of `root`.
///
/// A malformed selector yields an empty result, indistinguishable from no
/// match; use [`try_select`] to tell the two apart.
///
/// ```
/// use lectern_dom::Element;
///
/// let doc = Element::new("div").with_child(Element::new("span"));
/// assert_eq!(lectern_select::select(&doc, "span").len(), 1);
/// assert_eq!(lectern_select::select(&doc, "").len(), 1);
/// assert!(lectern_select::select(&doc, "SPAN").is_empty());
/// ```
#[must_use]
pub fn select<E: SelectableElement>(root: E, selector: &str) -> Vec<E> {
    select_from(&[root], selector)
}

/// Run `selector` starting from an existing candidate set.
#[must_use]
pub fn select_from<E: SelectableElement>(contexts: &[E], selector: &str) -> Vec<E> {
    match Selector::parse(selector) {
        Ok(parsed) => parsed.select_from(contexts),
        Err(error) => {
            log::debug!("selector {selector:?} rejected: {error}");
            Vec::new()
        }
    }
}

/// Like [`select`], but a malformed selector is an error.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidToken`] when a token is none of the
/// supported forms.
pub fn try_select<E: SelectableElement>(
    root: E,
    selector: &str,
) -> Result<Vec<E>, SelectorError> {
    Ok(Selector::parse(selector)?.select(root))
}
