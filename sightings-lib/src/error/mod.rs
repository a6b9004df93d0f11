//! Error types

mod config;
mod load;
mod row;

pub use config::*;
pub use load::*;
pub use row::*;

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Row(#[from] RowError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No observation carries the requested id.
    #[error("No observation with id '{0}'")]
    NotFound(String),
}
