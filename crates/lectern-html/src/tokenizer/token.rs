use core::fmt;

use lectern_dom::Attribute;

/// A token emitted by [`HtmlTokenizer`](super::HtmlTokenizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<!DOCTYPE ...>`; the payload is everything after the keyword, trimmed.
    Doctype(String),

    /// An opening tag. Names are lower-cased; the first occurrence of a
    /// duplicated attribute wins.
    StartTag {
        /// Lower-cased tag name.
        name: String,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },

    /// A closing tag. Attributes on end tags are discarded.
    EndTag {
        /// Lower-cased tag name.
        name: String,
    },

    /// A run of character data with references already decoded (except
    /// inside `script` and `style`).
    Text(String),

    /// The data of a `<!-- comment -->`.
    Comment(String),
}

impl Token {
    /// Build a start tag from `(name, value)` pairs.
    #[must_use]
    pub fn start_tag(name: &str, attributes: &[(&str, &str)], self_closing: bool) -> Self {
        Self::StartTag {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(name, value)| Attribute {
                    name: (*name).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
            self_closing,
        }
    }

    /// Build an end tag.
    #[must_use]
    pub fn end_tag(name: &str) -> Self {
        Self::EndTag {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype(data) => write!(f, "<!DOCTYPE {data}>"),
            Self::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text(data) => write!(f, "{data:?}"),
            Self::Comment(data) => write!(f, "<!--{data}-->"),
        }
    }
}
