//! Node attributes and attribute list matching.
//!
//! Attribute lists are compared as multisets: order never matters, but a
//! duplicated attribute must be duplicated on both sides.

use std::fmt;

/// A single attribute of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Namespace of the attribute (e.g. "xlink"), empty when absent.
    pub namespace: String,
    /// The attribute name.
    pub key: String,
    /// The attribute value, entities already resolved.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute without namespace.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            namespace: String::new(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an attribute bound to a namespace.
    pub fn with_namespace(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Attribute {
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.namespace, self.key, self.value)
    }
}

/// Display adapter rendering a list as `[{ns key value} {ns key value}]`.
pub struct AttrList<'a>(pub &'a [Attribute]);

impl fmt::Display for AttrList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", attr)?;
        }
        f.write_str("]")
    }
}

/// Returns true if `attr` appears in `list`.
pub fn find_attr(attr: &Attribute, list: &[Attribute]) -> bool {
    list.iter().any(|a| a == attr)
}

/// Returns true if both lists hold the same attributes the same number of
/// times, whatever their order.
pub fn attr_equal(m: &[Attribute], n: &[Attribute]) -> bool {
    if m.len() != n.len() {
        return false;
    }
    m.iter().all(|attr| {
        let in_m = m.iter().filter(|a| *a == attr).count();
        let in_n = n.iter().filter(|a| *a == attr).count();
        in_m == in_n
    })
}

/// Returns true if the attributes of `n` are found in the reference list `m`.
///
/// Only the first `min(m.len(), n.len())` attributes of `n` are looked up, so
/// attributes of `n` past the length of `m` never cause a mismatch.
pub fn attr_included(m: &[Attribute], n: &[Attribute]) -> bool {
    if m.is_empty() && n.is_empty() {
        return true;
    }
    let bound = m.len().min(n.len());
    n.iter().take(bound).all(|attr| find_attr(attr, m))
}
