//! Node construction interface

use rowdom::{Element, Node, Tag};

/// The node-construction primitives a row is built from.
///
/// Implementations own how nodes are represented. [`DomDocument`] produces a
/// [`rowdom`] tree; tests can substitute a recorder.
pub trait Document {
    type Node;

    /// Creates an empty element.
    fn create_element(&mut self, tag: Tag) -> Self::Node;

    /// Creates a text node.
    fn create_text(&mut self, text: &str) -> Self::Node;

    /// Sets an attribute on an element node.
    fn set_attribute(&mut self, node: &mut Self::Node, name: &str, value: &str);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &mut Self::Node, child: Self::Node);
}

/// Builds [`rowdom::Node`] trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomDocument;

impl DomDocument {
    pub fn new() -> Self {
        Self
    }
}

impl Document for DomDocument {
    type Node = Node;

    fn create_element(&mut self, tag: Tag) -> Node {
        Node::Element(Element::new(tag))
    }

    fn create_text(&mut self, text: &str) -> Node {
        Node::text(text)
    }

    fn set_attribute(&mut self, node: &mut Node, name: &str, value: &str) {
        match node.as_element_mut() {
            Some(el) => el.set_attribute(name, value),
            None => log::warn!("[document] ignoring attribute {name} on a text node"),
        }
    }

    fn append_child(&mut self, parent: &mut Node, child: Node) {
        match parent.as_element_mut() {
            Some(el) => el.append_child(child),
            None => log::warn!("[document] ignoring child appended to a text node"),
        }
    }
}
