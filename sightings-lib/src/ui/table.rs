//! The observation table and its row container.

use std::path::Path;

use rowdom::{Element, Node, Tag, find_element, remove_element};

use crate::config::RenderConfig;
use crate::document::DomDocument;
use crate::error::Error;
use crate::load::load_observations_from_path;
use crate::model::{Observation, ObservationId};

use super::row::build_row_for_observation;

/// A `<table>` of observations with a title, a header row and a body of rows.
///
/// ```html
/// <table id="observations">
///   <caption id="table-title"><span id="table-Muskrats">Muskrats</span></caption>
///   <thead><tr><th>Photo</th>...</tr></thead>
///   <tbody id="rows">...</tbody>
/// </table>
/// ```
#[derive(Debug, Clone)]
pub struct ObservationTable {
    config: RenderConfig,
    title: Element,
    tbody: Element,
}

impl ObservationTable {
    pub fn new(config: RenderConfig) -> Self {
        let title = Element::new(Tag::Caption).id(&config.title_id);
        let tbody = Element::tbody().id(&config.tbody_id);
        Self {
            config,
            title,
            tbody,
        }
    }

    /// Loads a JSON file of observations and renders them into a new table.
    pub fn from_path(path: impl AsRef<Path>, config: RenderConfig) -> Result<Self, Error> {
        let observations = load_observations_from_path(path)?;
        let mut table = Self::new(config);
        table.render_observations(&observations);
        Ok(table)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the title with `<span id="table-{title}">{title}</span>`.
    pub fn update_table_title(&mut self, title: &str) {
        self.title.clear_children();
        self.title
            .append_child(Element::span(title).id(format!("table-{title}")));
    }

    /// Appends a row to the table body.
    pub fn add_row(&mut self, row: Node) {
        self.tbody.append_child(row);
    }

    /// Removes every row from the table body, returning how many were removed.
    pub fn clear_all_table_rows(&mut self) -> usize {
        let removed = self.tbody.clear_children();
        log::debug!("[table] cleared {removed} rows");
        removed
    }

    /// Removes the row for the given observation.
    pub fn remove_row(&mut self, id: &ObservationId) -> Option<Element> {
        remove_element(&mut self.tbody, &id.to_string())
    }

    /// Looks up the row for the given observation.
    pub fn row(&self, id: &ObservationId) -> Option<&Element> {
        let id = id.to_string();
        self.tbody.child_elements().find(|el| el.has_id(&id))
    }

    pub fn rows(&self) -> impl Iterator<Item = &Element> {
        self.tbody.child_elements()
    }

    pub fn row_count(&self) -> usize {
        self.tbody.child_elements().count()
    }

    /// Replaces the current rows with one row per observation, in input order.
    ///
    /// Observations that cannot be turned into a row are skipped and logged.
    /// Returns the number of rows rendered.
    pub fn render_observations(&mut self, observations: &[Observation]) -> usize {
        self.clear_all_table_rows();

        let mut doc = DomDocument::new();
        let mut rendered = 0;

        for (index, observation) in observations.iter().enumerate() {
            match build_row_for_observation(&mut doc, observation, self.config.locale) {
                Ok(row) => {
                    self.add_row(row);
                    rendered += 1;
                }
                Err(e) => log::warn!("[table] skipping observation #{index}: {e}"),
            }
        }

        log::info!(
            "[table] rendered {rendered} of {} observations",
            observations.len()
        );
        rendered
    }

    /// Assembles the full table element.
    pub fn element(&self) -> Element {
        let header = Element::tr().children(self.config.headers.iter().map(|heading| {
            Node::from(Element::new(Tag::Th).child(Node::text(heading.as_str())))
        }));

        Element::table()
            .id(&self.config.table_id)
            .child(self.title.clone())
            .child(Element::new(Tag::Thead).child(header))
            .child(self.tbody.clone())
    }

    /// Looks up any element in the assembled table by id.
    pub fn find(&self, id: &str) -> Option<Element> {
        find_element(&self.element(), id).cloned()
    }

    pub fn to_html(&self) -> String {
        rowdom::to_html(&self.element().into())
    }

    pub fn to_html_pretty(&self, indent: usize) -> String {
        rowdom::to_html_pretty(&self.element().into(), indent)
    }
}

impl Default for ObservationTable {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
