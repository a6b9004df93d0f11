use super::{Node, Tag};

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub tag: Tag,
    pub id: Option<String>,

    /// Attributes in insertion order. `id` is kept separately and never appears here.
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::Tbody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn td() -> Self {
        Self::new(Tag::Td)
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new(Tag::A).attr("href", href)
    }

    pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(Tag::Img).attr("src", src).attr("alt", alt)
    }

    pub fn time(datetime: impl Into<String>, display: impl Into<String>) -> Self {
        Self::new(Tag::Time)
            .attr("datetime", datetime)
            .child(Node::text(display))
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).child(Node::text(text))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing the value in place if the name is already present.
    ///
    /// Setting `id` updates the element's identity rather than the attribute list.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if name == "id" {
            self.id = Some(value);
            return;
        }

        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        if name == "id" {
            return self.id.as_deref();
        }
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        if name == "id" {
            return self.id.take();
        }
        let pos = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(pos).1)
    }

    // Children
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Node>) -> Self {
        for child in new_children {
            self.append_child(child);
        }
        self
    }

    /// Append a child node. Void elements silently drop children.
    pub fn append_child(&mut self, child: impl Into<Node>) {
        if self.tag.is_void() {
            log::warn!("[rowdom] dropping child appended to void <{}>", self.tag);
            return;
        }
        self.children.push(child.into());
    }

    /// Remove every child, returning how many were removed.
    pub fn clear_children(&mut self) -> usize {
        let count = self.children.len();
        self.children.clear();
        count
    }

    /// Iterate over the element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
