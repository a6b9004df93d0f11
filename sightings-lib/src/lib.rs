//! Observation table rows
//!
//! Turns wildlife observation records into HTML table rows. Node construction
//! goes through the [`Document`] trait so the mapping can run against any
//! markup backend; [`DomDocument`] builds a [`rowdom`] tree.

pub mod config;
pub mod document;
pub mod error;
pub mod load;
pub mod locale;
pub mod model;
pub mod ui;

pub use config::RenderConfig;
pub use document::{Document, DomDocument};
pub use error::{ConfigError, Error, LoadError, RowError};
pub use load::{load_observations, load_observations_from_path};
pub use locale::DateLocale;
pub use model::{Observation, ObservationId};
pub use ui::{ObservationTable, build_row_for_id, build_row_for_observation};
