//! HTML serialization of the markup tree.

use std::fmt::Write;

use crate::element::{Element, Node};

/// Escapes a string for use as HTML text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a string for use in a double-quoted HTML attribute value.
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Serialize a node to compact HTML with no insignificant whitespace.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, None, 0);
    out
}

/// Serialize a node to HTML, placing the children of block elements
/// (`table`, `tbody`, `tr`, ...) on their own lines indented by `indent` spaces.
///
/// Cells and inline content stay on a single line, so whitespace inside a
/// cell is never introduced.
pub fn to_html_pretty(node: &Node, indent: usize) -> String {
    let mut out = String::new();
    write_node(&mut out, node, Some(indent), 0);
    out
}

fn write_node(out: &mut String, node: &Node, indent: Option<usize>, depth: usize) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(el) => write_element(out, el, indent, depth),
    }
}

fn write_element(out: &mut String, el: &Element, indent: Option<usize>, depth: usize) {
    write_open_tag(out, el);

    if el.tag.is_void() {
        return;
    }

    match indent {
        Some(width) if el.tag.is_block() && !el.children.is_empty() => {
            for child in &el.children {
                out.push('\n');
                push_indent(out, width * (depth + 1));
                write_node(out, child, indent, depth + 1);
            }
            out.push('\n');
            push_indent(out, width * depth);
        }
        _ => {
            for child in &el.children {
                // Inline content is always compact.
                write_node(out, child, None, depth + 1);
            }
        }
    }

    let _ = write!(out, "</{}>", el.tag);
}

fn write_open_tag(out: &mut String, el: &Element) {
    let _ = write!(out, "<{}", el.tag);
    if let Some(id) = &el.id {
        let _ = write!(out, " id=\"{}\"", escape_attribute(id));
    }
    for (name, value) in &el.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
    }
    out.push('>');
}

fn push_indent(out: &mut String, n: usize) {
    out.push_str(&" ".repeat(n));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Tag;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Fish & Chips <b>"), "Fish &amp; Chips &lt;b&gt;");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute(r#"a"b&c"#), "a&quot;b&amp;c");
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let img = Node::from(Element::img("a.jpg", "A"));
        assert_eq!(to_html(&img), r#"<img src="a.jpg" alt="A">"#);
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(to_html(&Element::new(Tag::Td).into()), "<td></td>");
    }
}
