//! Single-step node helpers.

use rowdom::Tag;

use crate::document::Document;

/// Creates a `<tr>` with the given id.
pub fn create_table_row<D: Document>(doc: &mut D, id: &str) -> D::Node {
    let mut tr = doc.create_element(Tag::Tr);
    doc.set_attribute(&mut tr, "id", id);
    tr
}

/// Wraps `child` in a `<td>`.
pub fn create_table_cell<D: Document>(doc: &mut D, child: D::Node) -> D::Node {
    let mut td = doc.create_element(Tag::Td);
    doc.append_child(&mut td, child);
    td
}

/// Wraps `child` in a `<td>` and appends it to `row`.
///
/// With no child an empty `<td>` is appended, keeping the column count fixed.
pub fn add_content_to_row<D: Document>(doc: &mut D, child: Option<D::Node>, row: &mut D::Node) {
    let td = match child {
        Some(child) => create_table_cell(doc, child),
        None => doc.create_element(Tag::Td),
    };
    doc.append_child(row, td);
}

/// Creates `<img src="..." alt="...">`.
pub fn create_img<D: Document>(doc: &mut D, src: &str, alt: &str) -> D::Node {
    let mut img = doc.create_element(Tag::Img);
    doc.set_attribute(&mut img, "src", src);
    doc.set_attribute(&mut img, "alt", alt);
    img
}

pub fn create_text<D: Document>(doc: &mut D, text: &str) -> D::Node {
    doc.create_text(text)
}

/// Creates `<a href="...">` around `inner`, which may be text or an element.
pub fn create_anchor<D: Document>(doc: &mut D, href: &str, inner: D::Node) -> D::Node {
    let mut a = doc.create_element(Tag::A);
    doc.set_attribute(&mut a, "href", href);
    doc.append_child(&mut a, inner);
    a
}

/// Creates `<time datetime="{datetime}">{display}</time>`.
pub fn create_time<D: Document>(doc: &mut D, datetime: &str, display: &str) -> D::Node {
    let mut time = doc.create_element(Tag::Time);
    doc.set_attribute(&mut time, "datetime", datetime);
    let text = doc.create_text(display);
    doc.append_child(&mut time, text);
    time
}

pub fn to_yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
