use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{AppError, AppResult};

pub const LAST_MODULE_KEY: &str = "last_module";
pub const SAVED_MODULES_KEY: &str = "saved_modules";

/// String key/value storage for persisted modules. Values are opaque JSON
/// text; decoding and corruption handling belong to the caller.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> AppResult<()>;
}

#[derive(Default)]
pub struct InMemoryModuleStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryModuleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ModuleStore for InMemoryModuleStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
pub struct FileModuleStore {
    dir: PathBuf,
}

impl FileModuleStore {
    pub async fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        log::info!("Persisting modules under {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::StorageError(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl ModuleStore for FileModuleStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key)?;
        // Write-then-rename so a crash never leaves a half-written value.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}
