//! Node structures for document tree representation.
//!
//! A tree is made of `NodeRef`s. Each node owns its children; the parent link
//! is weak and, like the sibling position, is only used for navigation.
//! Comparison code looks at `NodeContent` and at the child lists, never at
//! node addresses.

pub mod attribute;
mod content;

pub use attribute::{attr_equal, attr_included, find_attr, AttrList, Attribute};
pub use content::{print_data, NodeContent, NodeType, ANY_TYPE};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A reference-counted pointer to a node.
pub type NodeRef = Rc<RefCell<NodeInner>>;

/// Creates a detached node holding `content`.
pub fn new_node(content: NodeContent) -> NodeRef {
    Rc::new(RefCell::new(NodeInner::new(content)))
}

/// The inner data of a node in the parse tree.
#[derive(Debug)]
pub struct NodeInner {
    /// Identity of this node.
    content: NodeContent,
    /// Child nodes, in document order.
    children: Vec<NodeRef>,
    /// Weak reference to parent node.
    parent: Weak<RefCell<NodeInner>>,
    /// Zero-based position among siblings (-1 for root).
    child_pos: i32,
}

impl NodeInner {
    /// Creates a detached node.
    pub fn new(content: NodeContent) -> Self {
        NodeInner {
            content,
            children: Vec::new(),
            parent: Weak::new(),
            child_pos: -1,
        }
    }

    /// Returns the content of this node.
    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Returns the node type.
    pub fn node_type(&self) -> NodeType {
        self.content.node_type
    }

    /// Returns the tag name or literal text.
    pub fn data(&self) -> &str {
        &self.content.data
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns a reference to the child at the given index.
    pub fn child(&self, index: usize) -> Option<&NodeRef> {
        self.children.get(index)
    }

    /// Returns the first child, if any.
    pub fn first_child(&self) -> Option<&NodeRef> {
        self.children.first()
    }

    /// Returns the children as a slice.
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Returns a weak reference to the parent.
    pub fn parent(&self) -> &Weak<RefCell<NodeInner>> {
        &self.parent
    }

    /// Returns the child position (0-based index among siblings, -1 for root).
    pub fn child_pos(&self) -> i32 {
        self.child_pos
    }
}

/// Helper functions that work with NodeRef.
impl NodeInner {
    /// Adds a child node. Must be called on the NodeRef wrapper.
    pub fn add_child_to_ref(parent_ref: &NodeRef, child_ref: NodeRef) {
        {
            let mut child = child_ref.borrow_mut();
            child.parent = Rc::downgrade(parent_ref);
            child.child_pos = parent_ref.borrow().children.len() as i32;
        }
        parent_ref.borrow_mut().children.push(child_ref);
    }

    /// Gets the next sibling of a node.
    pub fn next_sibling_of_ref(node_ref: &NodeRef) -> Option<NodeRef> {
        let node = node_ref.borrow();
        if node.child_pos < 0 {
            return None;
        }
        let parent = node.parent.upgrade()?;
        let parent_borrowed = parent.borrow();
        parent_borrowed
            .children
            .get((node.child_pos + 1) as usize)
            .cloned()
    }

    /// Returns the location of a node below its root, as `/`-separated
    /// `name[position]` steps. Non-element steps are named after their type.
    pub fn path_of_ref(node_ref: &NodeRef) -> String {
        let mut steps = Vec::new();
        let mut current = node_ref.clone();
        loop {
            let parent = {
                let node = current.borrow();
                let Some(parent) = node.parent.upgrade() else {
                    break;
                };
                let name = match node.node_type() {
                    NodeType::Element => node.data().to_string(),
                    t => format!("#{}", t.name().to_ascii_lowercase()),
                };
                steps.push(format!("{}[{}]", name, node.child_pos));
                parent
            };
            current = parent;
        }
        steps.reverse();
        format!("/{}", steps.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = new_node(NodeContent::element("root"));
        let borrowed = node.borrow();
        assert_eq!(borrowed.node_type(), NodeType::Element);
        assert_eq!(borrowed.data(), "root");
        assert!(borrowed.first_child().is_none());
        assert!(borrowed.parent().upgrade().is_none());
        assert_eq!(borrowed.child_pos(), -1);
    }

    #[test]
    fn test_add_child() {
        let parent = new_node(NodeContent::element("parent"));
        let child1 = new_node(NodeContent::element("child1"));
        let child2 = new_node(NodeContent::text("child2"));

        NodeInner::add_child_to_ref(&parent, child1.clone());
        NodeInner::add_child_to_ref(&parent, child2.clone());

        assert_eq!(parent.borrow().child_count(), 2);
        assert_eq!(child1.borrow().child_pos(), 0);
        assert_eq!(child2.borrow().child_pos(), 1);
        assert!(Rc::ptr_eq(parent.borrow().first_child().unwrap(), &child1));
        assert!(Rc::ptr_eq(&child2.borrow().parent().upgrade().unwrap(), &parent));
    }

    #[test]
    fn test_next_sibling() {
        let parent = new_node(NodeContent::document());
        let child1 = new_node(NodeContent::element("a"));
        let child2 = new_node(NodeContent::element("b"));

        NodeInner::add_child_to_ref(&parent, child1.clone());
        NodeInner::add_child_to_ref(&parent, child2.clone());

        let next = NodeInner::next_sibling_of_ref(&child1).unwrap();
        assert!(Rc::ptr_eq(&next, &child2));
        assert!(NodeInner::next_sibling_of_ref(&child2).is_none());
        assert!(NodeInner::next_sibling_of_ref(&parent).is_none());
    }

    #[test]
    fn test_path_of_ref() {
        let root = new_node(NodeContent::document());
        let table = new_node(NodeContent::element("table"));
        let comment = new_node(NodeContent::comment("c"));
        let tr = new_node(NodeContent::element("tr"));
        let text = new_node(NodeContent::text("x"));

        NodeInner::add_child_to_ref(&root, comment);
        NodeInner::add_child_to_ref(&root, table.clone());
        NodeInner::add_child_to_ref(&table, tr.clone());
        NodeInner::add_child_to_ref(&tr, text.clone());

        assert_eq!(NodeInner::path_of_ref(&root), "/");
        assert_eq!(NodeInner::path_of_ref(&tr), "/table[1]/tr[0]");
        assert_eq!(NodeInner::path_of_ref(&text), "/table[1]/tr[0]/#text[0]");
    }
}
