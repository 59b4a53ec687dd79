//! Tree inclusion and identity checks.
//!
//! All three checks walk a reference tree `m` and a candidate tree `n` in
//! lockstep. Two nodes are compared with [`equal`]; when they match, the i-th
//! child of `m` is paired with the i-th child of `n` and the walk recurses.
//! Children are never re-matched out of order: the walk tests structural
//! alignment, not reordered equality.
//!
//! Each function returns `None` when no divergence was found, or the node
//! from which the trees diverge. When one side of a pair is absent, the
//! present side is returned.
//!
//! | check | divergence reported for | extra children of `n` |
//! |---|---|---|
//! | [`included_node`] | any mismatch | ignored |
//! | [`included_node_typed`] | mismatches of type `t` | ignored |
//! | [`identical_nodes`] | mismatches of type `t` | first extra child returned |

use tracing::trace;

use super::equal;
use crate::node::{NodeRef, NodeType};

/// Termination and filtering policy of a walk.
#[derive(Debug, Clone, Copy)]
enum Walk {
    Included,
    Typed(NodeType),
    Identical(NodeType),
}

impl Walk {
    /// Returns true if a node of this type is reported as a divergence.
    fn counts(self, node_type: NodeType) -> bool {
        match self {
            Walk::Included => true,
            Walk::Typed(t) | Walk::Identical(t) => node_type.matches(t),
        }
    }
}

/// Checks if `n` reproduces `m`, including order of siblings.
///
/// Only what `m` defines is checked: once the children of `m` are exhausted,
/// further children of `n` are not looked at. The returned node is the one
/// of `m` where the trees diverge, or `n` when `m` is absent.
pub fn included_node(m: Option<&NodeRef>, n: Option<&NodeRef>) -> Option<NodeRef> {
    walk(m, n, Walk::Included)
}

/// Like [`included_node`] where only nodes of type `t` are compared.
///
/// Mismatches between nodes of other types are skipped and the walk goes on
/// below them. `ANY_TYPE` reports every mismatch.
pub fn included_node_typed(
    m: Option<&NodeRef>,
    n: Option<&NodeRef>,
    t: NodeType,
) -> Option<NodeRef> {
    walk(m, n, Walk::Typed(t))
}

/// Like [`included_node_typed`], and fails if trees have a different size.
///
/// When `n` still has children after those of `m` are exhausted, the first
/// extra child is returned.
pub fn identical_nodes(m: Option<&NodeRef>, n: Option<&NodeRef>, t: NodeType) -> Option<NodeRef> {
    walk(m, n, Walk::Identical(t))
}

fn walk(m: Option<&NodeRef>, n: Option<&NodeRef>, mode: Walk) -> Option<NodeRef> {
    let (m, n) = match (m, n) {
        (None, None) => return None,
        (None, Some(n)) => return Some(n.clone()),
        (Some(m), None) => return Some(m.clone()),
        (Some(m), Some(n)) => (m, n),
    };
    let m_inner = m.borrow();
    let n_inner = n.borrow();

    if !equal(Some(m_inner.content()), Some(n_inner.content()))
        && mode.counts(m_inner.node_type())
        && mode.counts(n_inner.node_type())
    {
        trace!(reference = %m_inner.content(), candidate = %n_inner.content(), "nodes differ");
        return Some(m.clone());
    }

    for (i, child) in m_inner.children().iter().enumerate() {
        if let Some(found) = walk(Some(child), n_inner.child(i), mode) {
            if mode.counts(found.borrow().node_type()) {
                return Some(found);
            }
        }
    }

    if let Walk::Identical(_) = mode {
        if let Some(extra) = n_inner.child(m_inner.child_count()) {
            trace!(extra = %extra.borrow().content(), "candidate has more children");
            return Some(extra.clone());
        }
    }
    None
}
