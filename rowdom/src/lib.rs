pub mod element;
pub mod render;

pub use element::{find_element, remove_element, Element, Node, Tag};
pub use render::{to_html, to_html_pretty};
