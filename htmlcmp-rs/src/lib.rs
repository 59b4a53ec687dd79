//! htmlcmp - Structural search and comparison of HTML trees
//!
//! This library answers questions about parsed HTML documents: does a
//! reference fragment appear, unmodified, inside a candidate document? Are two
//! documents identical? Where do they diverge? What text sits under a given
//! tag?
//!
//! # Overview
//!
//! Documents are parsed into trees of [`NodeRef`]s. Nodes are compared by
//! their [`NodeContent`] (type, name, namespace and attributes, where the order
//! of attributes is irrelevant), never by address.
//!
//! - [`find_tag`], [`find_tags`] and [`find_node`] search a tree.
//! - [`included_node`], [`included_node_typed`] and [`identical_nodes`] walk two
//!   trees in lockstep and return the node where they diverge.
//! - [`get_text`] concatenates the text runs under a node.
//! - [`is_text_tag`] and [`is_text_node`] combine parsing, search and text
//!   extraction into a single check.
//!
//! # Example
//!
//! ```
//! use htmlcmp::{included_node, parse_str};
//!
//! let reference = parse_str(r#"<p class="ex1">A <em>B</em></p>"#).unwrap();
//! let candidate = parse_str(r#"<p class="ex1">A <em>B</em></p><p>more</p>"#).unwrap();
//! assert!(included_node(Some(&reference), Some(&candidate)).is_none());
//! ```

pub mod compare;
pub mod constants;
pub mod error;
pub mod html;
pub mod node;
pub mod search;
pub mod text;
pub mod validate;

// Re-export commonly used types
pub use compare::{equal, identical_nodes, included_node, included_node_typed, nodes_equal};
pub use error::{Error, Result, ValidationError};
pub use html::{parse_file, parse_reader, parse_str, HtmlParser, ParserOptions};
pub use node::{
    attr_included, new_node, print_data, Attribute, NodeContent, NodeInner, NodeRef, NodeType,
    ANY_TYPE,
};
pub use search::{find_node, find_tag, find_tags};
pub use text::{get_text, text_content};
pub use validate::{is_text_tag, is_text_node};
