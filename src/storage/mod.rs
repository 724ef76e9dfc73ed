//! Durable key-value storage for the bookmark mirror
//!
//! The bookmark store only needs three operations on a single key, captured by
//! [`KeyValueStore`]. Two implementations are provided:
//! - [`LocalStorage`]: SQLite through SeaORM, the durable default
//! - [`MemoryStore`]: a process-local map for tests and throwaway sessions

use async_trait::async_trait;

use crate::error::Result;

pub mod db;
pub mod memory;

pub use db::LocalStorage;
pub use memory::MemoryStore;

/// Minimal string key-value interface used by the bookmark store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` entirely. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}
