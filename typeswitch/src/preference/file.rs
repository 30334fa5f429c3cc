use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::PreferenceError;
use super::storage::StorageArea;

/// Storage area persisted as a flat JSON object on disk.
///
/// A missing file reads as empty. A malformed file also reads as empty (with
/// a warning) and is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the per-user default location.
    pub fn user_default() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            },
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<BTreeMap<String, String>>(&data) {
            Ok(items) => Ok(items),
            Err(err) => {
                log::warn!(
                    "preference file {} invalid: {err}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            },
        }
    }
}

impl StorageArea for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let payload = serde_json::to_string_pretty(&items)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }
}

fn default_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("typeswitch")
            .join("preferences.json");
    }

    std::env::temp_dir()
        .join("typeswitch")
        .join("preferences.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileStorage, StorageArea};

    #[test]
    fn given_missing_file_when_reading_then_slot_is_empty() {
        let root = test_temp_dir("missing");
        let storage = FileStorage::new(root.join("nested/preferences.json"));

        let value = storage
            .get_item("fontPreference")
            .expect("missing file should not be an error");

        assert_eq!(value, None);
        fs::remove_dir_all(&root).expect("temp dir should be removed");
    }

    #[test]
    fn given_written_slot_when_reading_then_value_and_other_keys_survive() {
        let root = test_temp_dir("round_trip");
        let storage = FileStorage::new(root.join("nested/preferences.json"));

        storage.set_item("theme", "dark").expect("write should succeed");
        storage
            .set_item("fontPreference", "lato")
            .expect("write should succeed");

        assert_eq!(
            storage.get_item("fontPreference").expect("read should succeed"),
            Some(String::from("lato"))
        );
        assert_eq!(
            storage.get_item("theme").expect("read should succeed"),
            Some(String::from("dark"))
        );
        fs::remove_dir_all(&root).expect("temp dir should be removed");
    }

    #[test]
    fn given_invalid_json_when_reading_then_slot_is_empty_and_write_repairs() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("preferences.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");
        let storage = FileStorage::new(&path);

        assert_eq!(
            storage.get_item("fontPreference").expect("read should succeed"),
            None
        );
        storage
            .set_item("fontPreference", "inter")
            .expect("write should succeed");
        assert_eq!(
            storage.get_item("fontPreference").expect("read should succeed"),
            Some(String::from("inter"))
        );
        fs::remove_dir_all(&root).expect("temp dir should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "typeswitch-preferences-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir).expect("temp dir should be created");
        dir
    }
}
