//! Loading observations from JSON.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::Observation;

/// Reads a JSON array of observations.
///
/// Only a malformed document fails as a whole. A record that cannot be read
/// (a wrong value type, an unparseable date) is logged and skipped, and the
/// remaining records keep their order.
pub fn load_observations<R: Read>(reader: R) -> Result<Vec<Observation>, LoadError> {
    let records: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    let total = records.len();

    let observations: Vec<Observation> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match Observation::deserialize(record) {
            Ok(observation) => Some(observation),
            Err(e) => {
                log::warn!("[load] skipping record #{index}: {e}");
                None
            }
        })
        .collect();

    log::debug!("[load] parsed {} of {total} observations", observations.len());
    Ok(observations)
}

/// Reads a JSON array of observations from a file.
pub fn load_observations_from_path(path: impl AsRef<Path>) -> Result<Vec<Observation>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    log::debug!("[load] reading {}", path.display());
    load_observations(BufReader::new(file))
}
