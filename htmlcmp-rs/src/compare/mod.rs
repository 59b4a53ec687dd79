//! Node comparison.
//!
//! Single nodes are compared with [`equal`]. Subtrees are compared by the
//! three walks of the [`inclusion`] module, which all build on it.

pub mod inclusion;

pub use inclusion::{identical_nodes, included_node, included_node_typed};

use crate::node::{attr_equal, NodeContent, NodeRef};

/// Returns true if all identity fields of `m` and `n` are equal.
///
/// Two absent nodes are equal; an absent node never equals a present one.
/// Attributes are compared as multisets.
pub fn equal(m: Option<&NodeContent>, n: Option<&NodeContent>) -> bool {
    match (m, n) {
        (None, None) => true,
        (Some(m), Some(n)) => {
            m.node_type == n.node_type
                && m.data == n.data
                && m.namespace == n.namespace
                && attr_equal(&m.attributes, &n.attributes)
        }
        _ => false,
    }
}

/// Same as [`equal`] on tree nodes. Children and position are ignored.
pub fn nodes_equal(m: Option<&NodeRef>, n: Option<&NodeRef>) -> bool {
    let m = m.map(|r| r.borrow());
    let n = n.map(|r| r.borrow());
    equal(m.as_deref().map(|i| i.content()), n.as_deref().map(|i| i.content()))
}
