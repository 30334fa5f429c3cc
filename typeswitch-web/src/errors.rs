use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures reaching the browser APIs the bindings need.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document element")]
    NoDocument,
    #[error("local storage unavailable: {message}")]
    StorageUnavailable { message: String },
    #[error("unknown font id {font_id}")]
    UnknownFont { font_id: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a thrown JS value for logs and error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
