//! Node content: the identity of a node, without its tree links.
//!
//! `NodeContent` is what equality looks at, and it doubles as the template
//! type for searches: a caller builds one as a plain value and never links it
//! into a tree.

use std::fmt;

use super::attribute::{AttrList, Attribute};
use crate::constants::NODE_TYPE_NAMES;

/// Kind of a node in a parsed document.
///
/// The ordinal of each variant is fixed. `Error` doubles as the "any type"
/// filter, see [`ANY_TYPE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    #[default]
    Error = 0,
    Text = 1,
    Document = 2,
    Element = 3,
    Comment = 4,
    DocType = 5,
}

/// Type filter that matches every node type.
pub const ANY_TYPE: NodeType = NodeType::Error;

impl NodeType {
    /// Returns the display name of this type.
    pub fn name(self) -> &'static str {
        NODE_TYPE_NAMES[self as usize]
    }

    /// Returns true if a node of this type passes the `filter`.
    ///
    /// [`ANY_TYPE`] lets every type through.
    pub fn matches(self, filter: NodeType) -> bool {
        filter == ANY_TYPE || self == filter
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity fields of a node.
#[derive(Debug, Clone, Default)]
pub struct NodeContent {
    /// Kind of node.
    pub node_type: NodeType,
    /// Tag name for elements and doctypes, literal text for text and comments.
    pub data: String,
    /// Namespace (e.g. "svg"), empty when absent.
    pub namespace: String,
    /// Attributes in document order.
    pub attributes: Vec<Attribute>,
}

impl NodeContent {
    /// Creates content of the given type and data.
    pub fn new(node_type: NodeType, data: impl Into<String>) -> Self {
        NodeContent {
            node_type,
            data: data.into(),
            namespace: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Creates an element without attributes.
    pub fn element(name: impl Into<String>) -> Self {
        Self::new(NodeType::Element, name)
    }

    /// Creates a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeType::Text, text)
    }

    /// Creates a comment.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(NodeType::Comment, text)
    }

    /// Creates a document root.
    pub fn document() -> Self {
        Self::new(NodeType::Document, "")
    }

    /// Creates a doctype marker.
    pub fn doctype(name: impl Into<String>) -> Self {
        Self::new(NodeType::DocType, name)
    }

    /// Appends an attribute without namespace.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Appends a namespaced attribute.
    pub fn with_namespaced_attribute(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes
            .push(Attribute::with_namespace(namespace, key, value));
        self
    }

    /// Sets the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Returns true if this is an element.
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Returns true if this is a text run.
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Returns the value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Renders `data (Type) [attributes] ns:[namespace]`, trimmed.
///
/// Attributes and namespace are left out when empty. The format is stable;
/// callers compare it literally.
impl fmt::Display for NodeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!("{} ({}) ", self.data, self.node_type);
        if !self.attributes.is_empty() {
            out.push_str(&AttrList(&self.attributes).to_string());
        }
        if !self.namespace.is_empty() {
            out.push_str(" ns:[");
            out.push_str(&self.namespace);
            out.push(']');
        }
        f.write_str(out.trim())
    }
}

/// Returns the canonical diagnostic string of `content`.
pub fn print_data(content: &NodeContent) -> String {
    content.to_string()
}
