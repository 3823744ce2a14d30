use crate::errors::AppError;
use crate::models::LogStore;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Fixed key the log is stored under; names the data file.
pub const STORAGE_KEY: &str = "behavior_log";

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data").join(format!("{STORAGE_KEY}.json"))
}

pub async fn load_data(path: &Path) -> LogStore {
    match fs::read(path).await {
        Ok(bytes) => {
            let store = LogStore::deserialize(Some(bytes.as_slice()));
            info!("loaded {} entries from {}", store.len(), path.display());
            store
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LogStore::deserialize(None),
        Err(err) => {
            error!("failed to read data file: {err}");
            LogStore::default()
        }
    }
}

pub async fn persist_data(path: &Path, store: &LogStore) -> Result<(), AppError> {
    let payload = store.serialize()?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write {}: {err}", path.display());
        AppError::internal(err)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        env::temp_dir().join(format!("behavior_log_{name}_{}_{nanos}.json", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty_store() {
        let store = load_data(&scratch_path("missing")).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn persisted_store_loads_back() {
        let path = scratch_path("roundtrip");
        let mut store = LogStore::default();
        store.append(Subject::Subject1, "Eating", true, "carrots");
        store.append(Subject::Subject2, "Digging", false, "");

        persist_data(&path, &store).await.unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, store);
        assert_eq!(loaded.log(Subject::Subject2).len(), 2);
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty_store() {
        let path = scratch_path("corrupt");
        std::fs::write(&path, b"\x00\x01 definitely not json").unwrap();

        let store = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert!(store.is_empty());
    }
}
