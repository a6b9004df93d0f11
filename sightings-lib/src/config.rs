//! Render configuration

use crate::locale::DateLocale;

/// Column headings, in row order.
pub const DEFAULT_HEADERS: [&str; 7] = [
    "Photo",
    "Date",
    "Name",
    "Endangered",
    "Native",
    "Threatened",
    "Introduced",
];

/// Configuration for rendering observations into a table.
///
/// # Example
///
/// ```
/// use sightings_lib::{DateLocale, RenderConfig};
///
/// let config = RenderConfig::default()
///     .with_locale(DateLocale::EnGb)
///     .with_tbody_id("sightings");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Locale used for the visible date text.
    ///
    /// Default: `en-US`
    pub locale: DateLocale,

    /// Id of the `<table>` element.
    ///
    /// Default: `observations`
    pub table_id: String,

    /// Id of the `<tbody>` that holds one row per observation.
    ///
    /// Default: `rows`
    pub tbody_id: String,

    /// Id of the element holding the table title.
    ///
    /// Default: `table-title`
    pub title_id: String,

    /// Header cell text.
    pub headers: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            locale: DateLocale::default(),
            table_id: "observations".to_string(),
            tbody_id: "rows".to_string(),
            title_id: "table-title".to_string(),
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl RenderConfig {
    /// Creates a new render config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config whose locale is read from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_locale(DateLocale::from_env())
    }

    /// Sets the date display locale.
    pub fn with_locale(mut self, locale: DateLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the table id.
    pub fn with_table_id(mut self, id: impl Into<String>) -> Self {
        self.table_id = id.into();
        self
    }

    /// Sets the table body id.
    pub fn with_tbody_id(mut self, id: impl Into<String>) -> Self {
        self.tbody_id = id.into();
        self
    }

    /// Sets the title element id.
    pub fn with_title_id(mut self, id: impl Into<String>) -> Self {
        self.title_id = id.into();
        self
    }

    /// Replaces the header cell text.
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }
}
