mod content;
mod node;
mod tag;

pub use content::Node;
pub use node::Element;
pub use tag::Tag;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.has_id(id) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Detach the first descendant with the given ID and return it.
///
/// The root itself is never removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let pos = root
        .children
        .iter()
        .position(|child| child.as_element().is_some_and(|el| el.has_id(id)));

    if let Some(pos) = pos {
        return match root.children.remove(pos) {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        };
    }

    for child in root.children.iter_mut() {
        if let Node::Element(el) = child {
            if let Some(removed) = remove_element(el, id) {
                return Some(removed);
            }
        }
    }

    None
}
