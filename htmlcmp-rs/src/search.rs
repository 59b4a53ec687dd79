//! Tag and node search.
//!
//! Searches are pre-order and depth-first: a node is tested before its
//! children, and children in document order. Results are references into the
//! searched tree.

use crate::compare::equal;
use crate::node::{NodeContent, NodeRef, NodeType};

/// Finds the first node named `name` whatever its attributes.
///
/// Only nodes of type `t` are considered; `ANY_TYPE` searches all types.
pub fn find_tag(root: &NodeRef, name: &str, t: NodeType) -> Option<NodeRef> {
    let node = root.borrow();
    if node.data() == name && node.node_type().matches(t) {
        return Some(root.clone());
    }
    node.children()
        .iter()
        .find_map(|child| find_tag(child, name, t))
}

/// Finds all nodes named `name` whatever their attributes.
///
/// A matching node is not searched further, so a tag nested inside another
/// match is not returned.
pub fn find_tags(root: &NodeRef, name: &str, t: NodeType) -> Vec<NodeRef> {
    let mut found = Vec::new();
    collect_tags(root, name, t, &mut found);
    found
}

fn collect_tags(node_ref: &NodeRef, name: &str, t: NodeType, found: &mut Vec<NodeRef>) {
    let node = node_ref.borrow();
    if node.data() == name && node.node_type().matches(t) {
        found.push(node_ref.clone());
        return;
    }
    for child in node.children() {
        collect_tags(child, name, t, found);
    }
}

/// Finds the first node equal to `template`.
///
/// Type, data, namespace and attributes must all match; see
/// [`equal`](crate::compare::equal).
pub fn find_node(root: &NodeRef, template: &NodeContent) -> Option<NodeRef> {
    let node = root.borrow();
    if equal(Some(node.content()), Some(template)) {
        return Some(root.clone());
    }
    node.children()
        .iter()
        .find_map(|child| find_node(child, template))
}
