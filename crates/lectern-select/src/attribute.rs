//! Attribute selectors: `[name]`, `[name=value]`, `[name~=value]` and friends.

use core::fmt;

use lectern_dom::SelectableElement;

/// How an attribute's value is compared.
///
/// Every operator except [`Exists`](Self::Exists) and
/// [`Equals`](Self::Equals) treats a missing attribute as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeOperator {
    /// `[attr]`: the element carries the attribute.
    Exists,

    /// `[attr=value]`: the value is exactly `value`. A missing attribute never
    /// matches, not even `[attr=""]`.
    Equals(String),

    /// `[attr~=value]`: `value` is one of the whitespace-separated words of
    /// the attribute value.
    ///
    /// Example: `[class~=active]` matches `<div class="btn active">`.
    Includes(String),

    /// `[attr^=value]`: the value begins with `value`.
    Prefix(String),

    /// `[attr$=value]`: the value ends with `value`.
    Suffix(String),

    /// `[attr*=value]`: the value contains `value`.
    Substring(String),

    /// `[attr|=value]`: the value is exactly `value` or begins with `value`
    /// immediately followed by `-`. For a whitespace-separated list the test
    /// also passes when one of the words does.
    ///
    /// Example: `[lang|=en]` matches `<p lang="en">` and `<p lang="en-US">`,
    /// `[class|=foo]` matches `<p class="foo bar">`.
    DashMatch(String),
}

impl AttributeOperator {
    /// Build an operator from its selector symbol and comparison value.
    ///
    /// `None` means no operator was written, which is an existence check.
    #[must_use]
    pub fn from_symbol(symbol: Option<char>, value: &str) -> Option<Self> {
        let value = value.to_string();
        match symbol {
            None => Some(Self::Exists),
            Some('=') => Some(Self::Equals(value)),
            Some('~') => Some(Self::Includes(value)),
            Some('^') => Some(Self::Prefix(value)),
            Some('$') => Some(Self::Suffix(value)),
            Some('*') => Some(Self::Substring(value)),
            Some('|') => Some(Self::DashMatch(value)),
            Some(_) => None,
        }
    }

    /// The operator character, `None` for an existence check.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Exists => None,
            Self::Equals(_) => Some('='),
            Self::Includes(_) => Some('~'),
            Self::Prefix(_) => Some('^'),
            Self::Suffix(_) => Some('$'),
            Self::Substring(_) => Some('*'),
            Self::DashMatch(_) => Some('|'),
        }
    }

    /// The comparison string, `None` for an existence check.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Exists => None,
            Self::Equals(value)
            | Self::Includes(value)
            | Self::Prefix(value)
            | Self::Suffix(value)
            | Self::Substring(value)
            | Self::DashMatch(value) => Some(value.as_str()),
        }
    }

    /// Apply the operator to an attribute value (`None` when absent).
    #[must_use]
    pub fn test(&self, actual: Option<&str>) -> bool {
        match self {
            Self::Exists => actual.is_some(),
            Self::Equals(value) => actual == Some(value.as_str()),
            Self::Includes(value) => actual
                .unwrap_or_default()
                .split_whitespace()
                .any(|word| word == value),
            Self::Prefix(value) => actual.unwrap_or_default().starts_with(value.as_str()),
            Self::Suffix(value) => actual.unwrap_or_default().ends_with(value.as_str()),
            Self::Substring(value) => actual.unwrap_or_default().contains(value.as_str()),
            Self::DashMatch(value) => {
                let actual = actual.unwrap_or_default();
                dash_match(actual, value)
                    || actual
                        .split_whitespace()
                        .any(|word| dash_match(word, value))
            }
        }
    }
}

/// `candidate` is `value` or starts with `value-`.
fn dash_match(candidate: &str, value: &str) -> bool {
    candidate
        .strip_prefix(value)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}

/// An attribute name together with the test applied to its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatcher {
    /// The attribute name, compared exactly.
    pub name: String,
    /// The comparison.
    pub operator: AttributeOperator,
}

impl AttributeMatcher {
    /// Create a matcher.
    #[must_use]
    pub fn new(name: impl Into<String>, operator: AttributeOperator) -> Self {
        Self {
            name: name.into(),
            operator,
        }
    }

    /// Whether `element` passes this attribute test. The tag is not checked.
    #[must_use]
    pub fn matches<E: SelectableElement>(&self, element: &E) -> bool {
        self.operator.test(element.attribute(&self.name))
    }
}

impl fmt::Display for AttributeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.operator.symbol(), self.operator.value()) {
            (Some('='), Some(value)) => write!(f, "[{}=\"{value}\"]", self.name),
            (Some(symbol), Some(value)) => write!(f, "[{}{symbol}=\"{value}\"]", self.name),
            _ => write!(f, "[{}]", self.name),
        }
    }
}
