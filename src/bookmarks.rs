//! Bookmark store: the authoritative list of bookmarked repositories.
//!
//! [`BookmarkStore`] owns the in-memory list and mirrors it, as one JSON array,
//! under a single key of a [`KeyValueStore`]. Every mutation rewrites the whole
//! key before it returns; the list is small and is not indexed.

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::{CorruptPolicy, StorageConfig};
use crate::error::{BookmarkError, Result};
use crate::model::{RepositoryEdit, RepositoryId, RepositoryRecord};
use crate::storage::KeyValueStore;

/// A bookmark store shared between concurrent callers.
///
/// The mutex serializes read-modify-write cycles against the durable key.
pub type SharedBookmarkStore = Arc<Mutex<BookmarkStore>>;

/// Ordered list of bookmarked repositories with a durable mirror.
///
/// Mutations build the new list, write it to storage, and only then replace the
/// in-memory copy. A failed write therefore leaves memory and storage agreeing
/// on the previous state.
///
/// Duplicate ids are accepted on [`add`](Self::add); [`update`](Self::update)
/// touches every record with the id and [`remove`](Self::remove) drops all of them.
///
/// # Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use starshelf::bookmarks::BookmarkStore;
/// use starshelf::config::CorruptPolicy;
/// use starshelf::storage::LocalStorage;
///
/// # async fn example() -> starshelf::error::Result<()> {
/// let storage = Arc::new(LocalStorage::open("starshelf.db").await?);
/// let store = BookmarkStore::open(storage, "repositories", CorruptPolicy::Fail).await?;
/// for record in store.records() {
///     println!("{} ({} stars)", record.name, record.stars);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BookmarkStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    on_corrupt: CorruptPolicy,
    records: Vec<RepositoryRecord>,
}

impl BookmarkStore {
    /// Open the store and load the current mirror into memory.
    ///
    /// # Errors
    /// Returns [`BookmarkError::CorruptState`] if the mirror is unreadable and the
    /// policy is [`CorruptPolicy::Fail`], or a storage error.
    pub async fn open(storage: Arc<dyn KeyValueStore>, key: &str, on_corrupt: CorruptPolicy) -> Result<Self> {
        let mut store = Self {
            storage,
            key: key.to_string(),
            on_corrupt,
            records: Vec::new(),
        };
        store.reload().await?;
        info!("Loaded {} bookmarked repositories", store.records.len());
        Ok(store)
    }

    /// Open the store using the `[storage]` configuration section.
    pub async fn from_config(storage: Arc<dyn KeyValueStore>, config: &StorageConfig) -> Result<Self> {
        Self::open(storage, &config.key, config.on_corrupt).await
    }

    /// Wrap the store for use from several tasks.
    pub fn into_shared(self) -> SharedBookmarkStore {
        Arc::new(Mutex::new(self))
    }

    /// Read the durable mirror without touching the in-memory list.
    ///
    /// An absent (or empty) key yields an empty list.
    pub async fn load(&self) -> Result<Vec<RepositoryRecord>> {
        let raw = match self.storage.get(&self.key).await? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<RepositoryRecord>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => match self.on_corrupt {
                CorruptPolicy::Fail => Err(BookmarkError::CorruptState {
                    key: self.key.clone(),
                    reason: e.to_string(),
                }),
                CorruptPolicy::Reset => {
                    warn!("Ignoring unreadable bookmark list under '{}': {}", self.key, e);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Replace the in-memory list with the durable mirror.
    pub async fn reload(&mut self) -> Result<()> {
        self.records = self.load().await?;
        Ok(())
    }

    /// Current bookmarks in insertion order.
    pub fn records(&self) -> &[RepositoryRecord] {
        &self.records
    }

    /// First bookmark with the given id.
    pub fn get(&self, id: &RepositoryId) -> Option<&RepositoryRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the full list.
    pub async fn add(&mut self, record: RepositoryRecord) -> Result<()> {
        if self.get(&record.id).is_some() {
            warn!("Repository id {} is already bookmarked, appending a duplicate", record.id);
        }

        let mut next = self.records.clone();
        next.push(record);
        self.commit(next).await?;
        debug!("Bookmark list now has {} entries", self.records.len());
        Ok(())
    }

    /// Replace the editable fields of every record with `id`.
    ///
    /// Returns `false` without writing anything when no record matches.
    pub async fn update(&mut self, id: &RepositoryId, edit: &RepositoryEdit) -> Result<bool> {
        if self.get(id).is_none() {
            debug!("No bookmark with id {}, nothing to update", id);
            return Ok(false);
        }

        let mut next = self.records.clone();
        next.iter_mut().filter(|r| &r.id == id).for_each(|r| r.apply(edit));
        self.commit(next).await?;
        Ok(true)
    }

    /// Drop every record with `id` and persist the remaining list.
    ///
    /// Returns how many records were removed.
    pub async fn remove(&mut self, id: &RepositoryId) -> Result<usize> {
        let next: Vec<RepositoryRecord> = self.records.iter().filter(|r| &r.id != id).cloned().collect();
        let removed = self.records.len() - next.len();
        self.commit(next).await?;
        Ok(removed)
    }

    /// Empty the list and delete the durable key.
    pub async fn clear(&mut self) -> Result<()> {
        self.storage.remove(&self.key).await?;
        self.records.clear();
        info!("Cleared all bookmarks");
        Ok(())
    }

    /// Persist `next` in full, then make it the in-memory list.
    async fn commit(&mut self, next: Vec<RepositoryRecord>) -> Result<()> {
        let serialized = serde_json::to_string(&next)
            .map_err(|e| BookmarkError::Storage(format!("Failed to serialize bookmarks: {}", e)))?;
        self.storage.set(&self.key, &serialized).await?;
        self.records = next;
        Ok(())
    }
}
