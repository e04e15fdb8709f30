use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::KvStore;

/// Read a whole collection. An absent key is an empty collection; a stored
/// document that fails to decode into `Vec<T>` is a `Schema` error.
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> StoreResult<Vec<T>> {
    match store.get(key).await? {
        Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Schema {
            key: key.to_owned(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Replace a whole collection.
pub async fn write_collection<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let value = serde_json::to_value(items).map_err(|source| StoreError::Schema {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, value).await
}

/// Read a single record. An absent key and an explicit JSON `null` both
/// read as `None`, so `clear_record` round-trips.
pub async fn read_record<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> StoreResult<Option<T>> {
    match store.get(key).await? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StoreError::Schema {
                key: key.to_owned(),
                source,
            }),
    }
}

/// Replace a single record.
pub async fn write_record<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    record: &T,
) -> StoreResult<()> {
    let value = serde_json::to_value(record).map_err(|source| StoreError::Schema {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, value).await
}

/// Overwrite a record with JSON `null`.
pub async fn clear_record(store: &dyn KvStore, key: &str) -> StoreResult<()> {
    store.set(key, Value::Null).await
}
