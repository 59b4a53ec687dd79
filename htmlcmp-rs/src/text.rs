//! Text extraction.

use crate::node::{NodeInner, NodeRef, NodeType};

/// Appends the text content of the descendants of `root` to `sink`.
///
/// Text runs are written as parsed, in document order, without separators.
/// The text of `root` itself is not included.
pub fn get_text(root: &NodeRef, sink: &mut String) {
    let mut next = root.borrow().first_child().cloned();
    while let Some(child) = next {
        {
            let inner = child.borrow();
            if inner.node_type() == NodeType::Text {
                sink.push_str(inner.data());
            }
        }
        get_text(&child, sink);
        next = NodeInner::next_sibling_of_ref(&child);
    }
}

/// Returns the text content of the descendants of `root`.
pub fn text_content(root: &NodeRef) -> String {
    let mut text = String::new();
    get_text(root, &mut text);
    text
}
