mod errors;
mod file;
mod storage;
mod store;

pub use errors::PreferenceError;
pub use file::FileStorage;
pub use storage::{OriginStorage, StorageArea, StorageChange, StorageHandle};
pub use store::{FONT_PREFERENCE_KEY, PreferenceStore};
