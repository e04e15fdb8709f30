use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::KvStore;

/// File-backed store: one `<key>.json` document per key under a data
/// directory, surviving restarts within one profile.
///
/// Writes go to a `.tmp` sibling first and are moved into place with a
/// rename, so an interrupted write leaves the previous document intact.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory.
    pub async fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| StoreError::Io {
                key: dir.display().to_string(),
                source,
            })?;
        Ok(Self { dir })
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KvStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        match fs::read(self.document_path(key)).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_owned(),
                    source,
                }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&value).map_err(|source| StoreError::Corrupt {
            key: key.to_owned(),
            source,
        })?;
        let path = self.document_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, &bytes)
            .await
            .map_err(|source| StoreError::Io {
                key: key.to_owned(),
                source,
            })?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io {
                key: key.to_owned(),
                source,
            })?;
        debug!(key, bytes = bytes.len(), "document written");
        Ok(())
    }
}
