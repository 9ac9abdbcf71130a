//! Store Errors

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted value exists but is not a JSON array of strings.
    #[error("malformed persisted state: {0}")]
    MalformedPersistedState(#[source] serde_json::Error),
}
