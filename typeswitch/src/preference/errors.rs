use thiserror::Error;

/// Errors emitted while reading or writing the preference slot.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Filesystem operation failed.
    #[error("preference IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("preference JSON failed")]
    Json(#[from] serde_json::Error),
    /// The storage backend refused the operation.
    #[error("preference storage unavailable: {message}")]
    Unavailable { message: String },
}
