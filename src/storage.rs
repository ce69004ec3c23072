use crate::errors::AppError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, path::Path};
use tokio::fs;
use tracing::{error, warn};

pub const CHALLENGES_KEY: &str = "challenges";
pub const TOTAL_POINTS_KEY: &str = "totalPoints";
pub const COMPLETED_MODULES_KEY: &str = "completedModules";
pub const QUIZ_COMPLETED_KEY: &str = "quizCompleted";
pub const TIPS_VIEWED_KEY: &str = "tipsViewed";

/// Per-device key-value store. Values are arbitrary JSON and are not checked
/// against any schema until a caller reads them back as a concrete type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct LocalStore {
    entries: BTreeMap<String, Value>,
}

impl LocalStore {
    /// Returns `None` when the key is missing or holds a value of another shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!("ignoring malformed value for {key}: {err}");
                None
            }
        }
    }

    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), AppError> {
        let value = serde_json::to_value(value)?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub async fn load_store(path: &Path) -> LocalStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse store file: {err}");
                LocalStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalStore::default(),
        Err(err) => {
            error!("failed to read store file: {err}");
            LocalStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &LocalStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store)?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write store file {}: {err}", path.display());
        AppError::internal(err)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_typed_values() {
        let mut store = LocalStore::default();
        store.set(TOTAL_POINTS_KEY, &120u64).unwrap();
        store.set(COMPLETED_MODULES_KEY, &vec![1u32, 4]).unwrap();

        assert_eq!(store.get::<u64>(TOTAL_POINTS_KEY), Some(120));
        assert_eq!(store.get::<Vec<u32>>(COMPLETED_MODULES_KEY), Some(vec![1, 4]));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn malformed_values_read_as_missing() {
        let store: LocalStore =
            serde_json::from_str(r#"{"quizCompleted": "yes", "tipsViewed": true}"#).unwrap();
        assert_eq!(store.get::<bool>(QUIZ_COMPLETED_KEY), None);
        assert!(!store.get_or_default::<bool>(QUIZ_COMPLETED_KEY));
        assert!(store.get_or_default::<bool>(TIPS_VIEWED_KEY));
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut store = LocalStore::default();
        store.set(TIPS_VIEWED_KEY, &true).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"tipsViewed":true}"#);
    }

    #[tokio::test]
    async fn persist_then_load_keeps_entries() {
        let mut path = std::env::temp_dir();
        path.push(format!("carbon_tracker_store_{}.json", std::process::id()));

        let mut store = LocalStore::default();
        store.set(TOTAL_POINTS_KEY, &40u64).unwrap();
        persist_store(&path, &store).await.unwrap();

        let loaded = load_store(&path).await;
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, store);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let loaded = load_store(Path::new("/nonexistent/carbon_tracker/store.json")).await;
        assert!(loaded.is_empty());
    }
}
