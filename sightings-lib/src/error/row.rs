//! Row construction errors

/// Error building a single table row.
///
/// A failed row never touches other rows; nothing is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The observation has an empty identifier, so its row could not be looked up later.
    #[error("Observation has no id")]
    MissingId,
}
