use strum_macros::Display;

use lectern_dom::Attribute;

use super::entities::decode_entities;
use super::token::Token;

/// Elements whose content is read verbatim up to the matching end tag.
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

/// Raw-text elements whose content still has character references decoded.
const ESCAPABLE_RAW_TEXT_ELEMENTS: [&str; 2] = ["textarea", "title"];

/// The tokenizer state machine.
///
/// Each state is a reduced form of its namesake in the WHATWG tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Character data between tags.
    Data,
    /// Just consumed `<`.
    TagOpen,
    /// Just consumed `</`.
    EndTagOpen,
    /// Reading a tag name.
    TagName,
    /// Between attributes.
    BeforeAttributeName,
    /// Reading an attribute name.
    AttributeName,
    /// After an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// After `=`, before the value.
    BeforeAttributeValue,
    /// Inside `"..."`.
    AttributeValueDoubleQuoted,
    /// Inside `'...'`.
    AttributeValueSingleQuoted,
    /// Reading an unquoted value.
    AttributeValueUnquoted,
    /// Just consumed `/` inside a tag.
    SelfClosingStartTag,
    /// Just consumed `<!`.
    MarkupDeclarationOpen,
    /// Inside `<!-- ... -->`.
    Comment,
    /// Inside `<? ... >` or a malformed `<! ... >`.
    BogusComment,
    /// Inside `<!DOCTYPE ... >`.
    Doctype,
    /// Inside a `script`, `style`, `textarea` or `title` element.
    RawText,
}

/// A tag being assembled.
#[derive(Debug)]
struct TagBuilder {
    name: String,
    is_end: bool,
    self_closing: bool,
    attributes: Vec<Attribute>,
}

impl TagBuilder {
    const fn start() -> Self {
        Self {
            name: String::new(),
            is_end: false,
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    const fn end() -> Self {
        Self {
            name: String::new(),
            is_end: true,
            self_closing: false,
            attributes: Vec::new(),
        }
    }
}

/// Converts markup text into a flat [`Token`] stream.
///
/// ```
/// use lectern_html::{HtmlTokenizer, Token};
///
/// let mut tokenizer = HtmlTokenizer::new("<p class=x>hi</p>".to_string());
/// tokenizer.run();
/// let tokens = tokenizer.into_tokens();
/// assert_eq!(tokens[0], Token::start_tag("p", &[("class", "x")], false));
/// assert_eq!(tokens[1], Token::Text("hi".to_string()));
/// assert_eq!(tokens[2], Token::end_tag("p"));
/// ```
pub struct HtmlTokenizer {
    state: TokenizerState,
    input: Vec<char>,
    pos: usize,
    token_stream: Vec<Token>,

    /// Pending character data, flushed before every non-text token.
    text: String,
    current_tag: Option<TagBuilder>,
    attr_name: String,
    attr_value: String,
    /// Comment, bogus comment or doctype data being collected.
    buffer: String,

    /// Name of the raw-text element whose end tag leaves [`TokenizerState::RawText`].
    raw_text_end: Option<String>,
}

impl HtmlTokenizer {
    /// Create a tokenizer over the whole input.
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            state: TokenizerState::Data,
            input: input.chars().collect(),
            pos: 0,
            token_stream: Vec::new(),
            text: String::new(),
            current_tag: None,
            attr_name: String::new(),
            attr_value: String::new(),
            buffer: String::new(),
            raw_text_end: None,
        }
    }

    /// The state the machine is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Tokenize the entire input.
    pub fn run(&mut self) {
        while let Some(c) = self.input.get(self.pos).copied() {
            self.pos += 1;
            self.step(c);
        }
        self.finish();
    }

    /// The tokens emitted by [`run`](Self::run).
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// "Reconsume in the X state": the current character is processed again.
    const fn reconsume_in(&mut self, state: TokenizerState) {
        self.pos -= 1;
        self.state = state;
    }

    fn step(&mut self, c: char) {
        match self.state {
            TokenizerState::Data => {
                if c == '<' {
                    self.state = TokenizerState::TagOpen;
                } else {
                    self.text.push(c);
                }
            }

            TokenizerState::TagOpen => match c {
                '!' => self.state = TokenizerState::MarkupDeclarationOpen,
                '/' => self.state = TokenizerState::EndTagOpen,
                '?' => {
                    self.buffer.clear();
                    self.reconsume_in(TokenizerState::BogusComment);
                }
                c if c.is_ascii_alphabetic() => {
                    self.current_tag = Some(TagBuilder::start());
                    self.reconsume_in(TokenizerState::TagName);
                }
                _ => {
                    self.text.push('<');
                    self.reconsume_in(TokenizerState::Data);
                }
            },

            TokenizerState::EndTagOpen => match c {
                c if c.is_ascii_alphabetic() => {
                    self.current_tag = Some(TagBuilder::end());
                    self.reconsume_in(TokenizerState::TagName);
                }
                // `</>` is dropped entirely.
                '>' => self.state = TokenizerState::Data,
                _ => {
                    self.buffer.clear();
                    self.reconsume_in(TokenizerState::BogusComment);
                }
            },

            TokenizerState::TagName => match c {
                c if c.is_whitespace() => self.state = TokenizerState::BeforeAttributeName,
                '/' => self.state = TokenizerState::SelfClosingStartTag,
                '>' => self.emit_tag(),
                _ => {
                    if let Some(tag) = self.current_tag.as_mut() {
                        tag.name.push(c.to_ascii_lowercase());
                    }
                }
            },

            TokenizerState::BeforeAttributeName => match c {
                c if c.is_whitespace() => {}
                '/' => self.state = TokenizerState::SelfClosingStartTag,
                '>' => self.emit_tag(),
                _ => {
                    self.attr_name.clear();
                    self.attr_value.clear();
                    self.attr_name.push(c.to_ascii_lowercase());
                    self.state = TokenizerState::AttributeName;
                }
            },

            TokenizerState::AttributeName => match c {
                c if c.is_whitespace() => self.state = TokenizerState::AfterAttributeName,
                '/' => {
                    self.finish_attribute();
                    self.state = TokenizerState::SelfClosingStartTag;
                }
                '=' => self.state = TokenizerState::BeforeAttributeValue,
                '>' => {
                    self.finish_attribute();
                    self.emit_tag();
                }
                _ => self.attr_name.push(c.to_ascii_lowercase()),
            },

            TokenizerState::AfterAttributeName => match c {
                c if c.is_whitespace() => {}
                '/' => {
                    self.finish_attribute();
                    self.state = TokenizerState::SelfClosingStartTag;
                }
                '=' => self.state = TokenizerState::BeforeAttributeValue,
                '>' => {
                    self.finish_attribute();
                    self.emit_tag();
                }
                _ => {
                    self.finish_attribute();
                    self.reconsume_in(TokenizerState::BeforeAttributeName);
                }
            },

            TokenizerState::BeforeAttributeValue => match c {
                c if c.is_whitespace() => {}
                '"' => self.state = TokenizerState::AttributeValueDoubleQuoted,
                '\'' => self.state = TokenizerState::AttributeValueSingleQuoted,
                '>' => {
                    self.finish_attribute();
                    self.emit_tag();
                }
                _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
            },

            TokenizerState::AttributeValueDoubleQuoted => {
                if c == '"' {
                    self.finish_attribute();
                    self.state = TokenizerState::BeforeAttributeName;
                } else {
                    self.attr_value.push(c);
                }
            }

            TokenizerState::AttributeValueSingleQuoted => {
                if c == '\'' {
                    self.finish_attribute();
                    self.state = TokenizerState::BeforeAttributeName;
                } else {
                    self.attr_value.push(c);
                }
            }

            TokenizerState::AttributeValueUnquoted => match c {
                c if c.is_whitespace() => {
                    self.finish_attribute();
                    self.state = TokenizerState::BeforeAttributeName;
                }
                '>' => {
                    self.finish_attribute();
                    self.emit_tag();
                }
                _ => self.attr_value.push(c),
            },

            TokenizerState::SelfClosingStartTag => {
                if c == '>' {
                    if let Some(tag) = self.current_tag.as_mut() {
                        tag.self_closing = true;
                    }
                    self.emit_tag();
                } else {
                    self.reconsume_in(TokenizerState::BeforeAttributeName);
                }
            }

            TokenizerState::MarkupDeclarationOpen => {
                self.buffer.clear();
                self.pos -= 1;
                if self.lookahead_is("--", false) {
                    self.pos += 2;
                    self.state = TokenizerState::Comment;
                } else if self.lookahead_is("doctype", true) {
                    self.pos += "doctype".len();
                    self.state = TokenizerState::Doctype;
                } else {
                    self.state = TokenizerState::BogusComment;
                }
            }

            TokenizerState::Comment => {
                if c == '-' && self.lookahead_is("->", false) {
                    self.pos += 2;
                    let data = std::mem::take(&mut self.buffer);
                    self.emit(Token::Comment(data));
                    self.state = TokenizerState::Data;
                } else {
                    self.buffer.push(c);
                }
            }

            TokenizerState::BogusComment => {
                if c == '>' {
                    let data = std::mem::take(&mut self.buffer);
                    self.emit(Token::Comment(data));
                    self.state = TokenizerState::Data;
                } else {
                    self.buffer.push(c);
                }
            }

            TokenizerState::Doctype => {
                if c == '>' {
                    let data = std::mem::take(&mut self.buffer);
                    self.emit(Token::Doctype(data.trim().to_string()));
                    self.state = TokenizerState::Data;
                } else {
                    self.buffer.push(c);
                }
            }

            TokenizerState::RawText => {
                if c == '<' && self.at_raw_text_end() {
                    self.flush_raw_text();
                    self.current_tag = Some(TagBuilder::end());
                    // Skip the `/`; the name is re-read in the tag name state.
                    self.pos += 1;
                    self.raw_text_end = None;
                    self.state = TokenizerState::TagName;
                } else {
                    self.text.push(c);
                }
            }
        }
    }

    /// Whether the input at the current position starts with `expected`.
    fn lookahead_is(&self, expected: &str, ignore_case: bool) -> bool {
        let mut pos = self.pos;
        for want in expected.chars() {
            let Some(&got) = self.input.get(pos) else {
                return false;
            };
            let same = if ignore_case {
                got.eq_ignore_ascii_case(&want)
            } else {
                got == want
            };
            if !same {
                return false;
            }
            pos += 1;
        }
        true
    }

    /// Whether `/name` (followed by whitespace, `/`, `>` or EOF) comes next.
    fn at_raw_text_end(&self) -> bool {
        let Some(name) = self.raw_text_end.as_deref() else {
            return false;
        };
        if self.input.get(self.pos) != Some(&'/') {
            return false;
        }
        let mut pos = self.pos + 1;
        for want in name.chars() {
            match self.input.get(pos) {
                Some(got) if got.eq_ignore_ascii_case(&want) => pos += 1,
                _ => return false,
            }
        }
        self.input
            .get(pos)
            .is_none_or(|&c| c.is_whitespace() || c == '/' || c == '>')
    }

    fn finish_attribute(&mut self) {
        let name = std::mem::take(&mut self.attr_name);
        let value = std::mem::take(&mut self.attr_value);
        if name.is_empty() {
            return;
        }
        let Some(tag) = self.current_tag.as_mut() else {
            return;
        };
        if tag.attributes.iter().any(|attr| attr.name == name) {
            log::debug!("duplicate attribute `{name}` on <{}> ignored", tag.name);
            return;
        }
        tag.attributes.push(Attribute {
            name,
            value: decode_entities(&value),
        });
    }

    fn emit_tag(&mut self) {
        self.state = TokenizerState::Data;
        let Some(tag) = self.current_tag.take() else {
            return;
        };

        if tag.is_end {
            self.emit(Token::EndTag { name: tag.name });
            return;
        }

        if !tag.self_closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) {
            self.raw_text_end = Some(tag.name.clone());
            self.state = TokenizerState::RawText;
        }
        self.emit(Token::StartTag {
            name: tag.name,
            attributes: tag.attributes,
            self_closing: tag.self_closing,
        });
    }

    /// Push a token, flushing pending character data in front of it.
    fn emit(&mut self, token: Token) {
        self.flush_text();
        self.token_stream.push(token);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let data = decode_entities(&std::mem::take(&mut self.text));
            self.token_stream.push(Token::Text(data));
        }
    }

    fn flush_raw_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.text);
        let escapable = self
            .raw_text_end
            .as_deref()
            .is_some_and(|name| ESCAPABLE_RAW_TEXT_ELEMENTS.contains(&name));
        let data = if escapable { decode_entities(&raw) } else { raw };
        self.token_stream.push(Token::Text(data));
    }

    /// Handle end of input according to the state we stopped in.
    fn finish(&mut self) {
        match self.state {
            TokenizerState::Data => self.flush_text(),
            TokenizerState::RawText => self.flush_raw_text(),
            TokenizerState::TagOpen => {
                self.text.push('<');
                self.flush_text();
            }
            TokenizerState::EndTagOpen => {
                self.text.push_str("</");
                self.flush_text();
            }
            TokenizerState::Comment | TokenizerState::BogusComment => {
                let data = std::mem::take(&mut self.buffer);
                self.emit(Token::Comment(data));
            }
            TokenizerState::Doctype => {
                let data = std::mem::take(&mut self.buffer);
                self.emit(Token::Doctype(data.trim().to_string()));
            }
            state @ (TokenizerState::TagName
            | TokenizerState::BeforeAttributeName
            | TokenizerState::AttributeName
            | TokenizerState::AfterAttributeName
            | TokenizerState::BeforeAttributeValue
            | TokenizerState::AttributeValueDoubleQuoted
            | TokenizerState::AttributeValueSingleQuoted
            | TokenizerState::AttributeValueUnquoted
            | TokenizerState::SelfClosingStartTag
            | TokenizerState::MarkupDeclarationOpen) => {
                // An unterminated tag is dropped, as browsers do.
                log::debug!("unexpected end of input in {state} state");
                self.current_tag = None;
                self.flush_text();
            }
        }
    }
}
