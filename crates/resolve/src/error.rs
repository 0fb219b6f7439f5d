use thiserror::Error;

/// Errors returned by path resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A Mapping step lacked the required key. Suppressed into the
    /// caller's default when one is supplied.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// An encoded source failed to decode. Never suppressed by a default;
    /// malformed input at this boundary is a caller bug, not a missing key.
    #[error("malformed encoded input: {0}")]
    MalformedInput(String),
}
