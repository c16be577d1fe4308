// Flat JSON file persistence for the pipeline artifacts.
use crate::model::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use tracing::info;

pub struct JsonStore;

impl JsonStore {
    pub fn new() -> Self {
        Self
    }

    /// Writes a pretty-printed JSON array to `path`, logging the item count.
    pub fn save<T: Serialize>(&self, data: &[T], label: &str, path: &str) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json)?;
        info!("Saved {} {} to {}", data.len(), label, path);
        Ok(())
    }

    /// Reads a JSON array back. Loading as `serde_json::Value` lets callers
    /// skip malformed entries instead of failing the whole file.
    pub fn load<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, StorageError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("technologies.json");
        let path = path.to_str().unwrap();

        let store = JsonStore::new();
        let tags = vec!["AWS".to_string(), "Kubernetes".to_string()];
        store.save(&tags, "technologies", path).unwrap();

        let loaded: Vec<String> = store.load(path).unwrap();
        assert_eq!(loaded, tags);
    }

    #[test]
    fn loads_mixed_arrays_as_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.json");
        fs::write(&path, r#"["AWS", 42, null]"#).unwrap();

        let loaded: Vec<Value> = JsonStore::new().load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_str(), Some("AWS"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result: Result<Vec<Value>, _> = JsonStore::new().load("no-such-file.json");
        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
