//! Data model

mod observation;

pub use observation::{Observation, ObservationId};
