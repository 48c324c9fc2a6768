//! Markup tokenizer.
//!
//! A forgiving tokenizer in the shape of the WHATWG state machine, reduced
//! to the states needed to read real-world pages: tags, attributes,
//! comments, doctypes and raw-text elements.

mod entities;
#[allow(clippy::module_inception)]
mod tokenizer;
mod token;

pub use entities::decode_entities;
pub use token::Token;
pub use tokenizer::{HtmlTokenizer, TokenizerState};
