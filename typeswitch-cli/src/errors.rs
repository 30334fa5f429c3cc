use thiserror::Error;
use typeswitch::preference::PreferenceError;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("unknown font id `{id}` (run `typeswitch list` for the catalog)")]
    UnknownFont { id: String },
    #[error("preference store failed: {0}")]
    Preference(#[from] PreferenceError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
