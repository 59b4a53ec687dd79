//! HTML parsing.
//!
//! This module turns markup into the node trees searched and compared by the
//! rest of the crate. Parsing follows the HTML5 tree construction rules, so
//! malformed markup is repaired the way a browser repairs it: missing
//! `html`, `head`, `body` and `tbody` elements are inserted, open elements
//! are closed implicitly, and stray end tags are dropped.

mod parser;

pub use parser::{parse_file, parse_reader, parse_str, HtmlParser};

/// Options for HTML parsing.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Parse the content of `<noscript>` as raw text, as browsers with
    /// scripting enabled do.
    pub scripting_enabled: bool,
    /// Fail on the first tree construction error instead of repairing it.
    pub strict: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            scripting_enabled: true,
            strict: false,
        }
    }
}
