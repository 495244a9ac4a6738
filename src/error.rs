use thiserror::Error;

/// Failures raised by a record store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Store database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Failures raised by the external lookup service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    #[error("Lookup service unavailable: {0}")]
    Unavailable(String),
    #[error("Lookup transport error: {0}")]
    Transport(String),
}

/// Failures from an export sink or one of its streams.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExportError {
    #[error("Failed to open export {name}: {reason}")]
    Open { name: String, reason: String },
    #[error("Failed to write export row: {0}")]
    Write(String),
    #[error("Failed to close export: {0}")]
    Close(String),
}

/// The only failure that escapes a processing pass.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessError {
    #[error("Failed to fetch orders for user {user_id}: {source}")]
    FetchFailed { user_id: String, source: StoreError },
}
