use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;

use super::KeyValueStore;
use crate::entities::kv_entry;
use crate::error::{BookmarkError, Result};
use crate::repositories::KvEntryRepository;

/// SQLite-backed key-value storage
pub struct LocalStorage {
    conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the database file at `path`
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BookmarkError::Storage(format!("Failed to create data directory {}: {}", parent.display(), e))
                })?;
            }
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        info!("Opening bookmark database at {}", path.display());
        Self::connect(ConnectOptions::new(database_url)).await
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // Every pooled connection to :memory: is its own database
        options.min_connections(1).max_connections(1);
        Self::connect(options).await
    }

    async fn connect(mut options: ConnectOptions) -> Result<Self> {
        options.sqlx_logging(false);
        let conn = Database::connect(options).await?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create = schema.create_table_from_entity(kv_entry::Entity);
        create.if_not_exists();
        self.conn.execute(backend.build(&create)).await?;

        debug!("kv_entries table ready");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(KvEntryRepository::get(&self.conn, key).await?.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        KvEntryRepository::upsert(&self.conn, key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        KvEntryRepository::delete(&self.conn, key).await?;
        Ok(())
    }
}
