//! Persistent key-value store contract and its two implementations.
//!
//! The rest of the system never touches files or JSON directly: components
//! receive an `Arc<dyn KvStore>` at construction and go through the typed
//! collection helpers, which validate the stored shape on every read.

mod collection;
mod error;
mod file;
pub mod keys;
mod memory;

pub use collection::*;
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;

/// Durable mapping from string keys to JSON documents.
///
/// `get` of an unknown key yields `None`. `set` replaces the whole document
/// for the key; there is no partial update at this layer.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;
    async fn set(&self, key: &str, value: Value) -> StoreResult<()>;
}
