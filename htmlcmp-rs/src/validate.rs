//! Validation helpers.
//!
//! Each helper parses a document, locates a node and checks the text below
//! it. The expected text is parsed as markup too, so `Z<sub>3</sub>` matches
//! the text `Z3`. The first failure is reported.

use std::io::Read;

use tracing::debug;

use crate::error::ValidationError;
use crate::html::{parse_reader, parse_str};
use crate::node::{NodeContent, NodeRef, NodeType};
use crate::search::{find_node, find_tag};
use crate::text::text_content;

/// Checks the presence of element `tag` in `input` and its text value.
pub fn is_text_tag<R: Read>(input: R, tag: &str, expected: &str) -> Result<(), ValidationError> {
    let doc = parse_reader(input).map_err(ValidationError::Parsing)?;
    let node = find_tag(&doc, tag, NodeType::Element).ok_or_else(|| {
        debug!(tag, "tag not found");
        ValidationError::TagNotFound(tag.to_string())
    })?;
    compare_text(&node, expected)
}

/// Checks the presence of a node equal to `template` in `input` and its text
/// value.
pub fn is_text_node<R: Read>(
    input: R,
    template: &NodeContent,
    expected: &str,
) -> Result<(), ValidationError> {
    let doc = parse_reader(input).map_err(ValidationError::Parsing)?;
    let node = find_node(&doc, template).ok_or_else(|| {
        debug!(node = %template, "node not found");
        ValidationError::NodeNotFound(template.data.clone())
    })?;
    compare_text(&node, expected)
}

/// Compares the text below `node` with the text of the markup `expected`.
fn compare_text(node: &NodeRef, expected: &str) -> Result<(), ValidationError> {
    let got = text_content(node);
    let want = text_content(&parse_str(expected).map_err(ValidationError::Parsing)?);
    if got != want {
        debug!(%got, %want, "texts differ");
        return Err(ValidationError::TextsDiffer { got, want });
    }
    Ok(())
}
