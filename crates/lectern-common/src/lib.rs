//! Common utilities for lectern.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Errors** - the selector syntax error surfaced by strict queries
//! - **Warning System** - colored, deduplicated terminal warnings

pub mod error;
pub mod warning;

pub use error::SelectorError;
