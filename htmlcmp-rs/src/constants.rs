//! Constants used throughout htmlcmp.

/// Display names of node types, indexed by `NodeType` ordinal.
pub const NODE_TYPE_NAMES: [&str; 6] = ["Error", "Text", "Document", "Element", "Comment", "DocType"];

/// Namespace URIs and the short names stored in nodes.
///
/// HTML elements carry no namespace. Foreign elements are tagged `svg` or
/// `math`, adjusted foreign attributes `xlink`, `xml` or `xmlns`.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("http://www.w3.org/1999/xhtml", ""),
    ("http://www.w3.org/2000/svg", "svg"),
    ("http://www.w3.org/1998/Math/MathML", "math"),
    ("http://www.w3.org/1999/xlink", "xlink"),
    ("http://www.w3.org/XML/1998/namespace", "xml"),
    ("http://www.w3.org/2000/xmlns/", "xmlns"),
];
