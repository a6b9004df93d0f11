//! Configuration errors

/// Error resolving render configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The locale tag does not name a supported date format.
    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),
}
