//! Error types shared by the bookmark store and the metadata fetcher.

/// Why a remote lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupCause {
    #[error("remote returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Errors surfaced to the presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Remote lookup for {owner}/{repo} failed: {cause}")]
    RemoteLookup {
        owner: String,
        repo: String,
        #[source]
        cause: LookupCause,
    },

    #[error("Stored data under '{key}' is corrupt: {reason}")]
    CorruptState { key: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for BookmarkError {
    fn from(err: sea_orm::DbErr) -> Self {
        BookmarkError::Storage(err.to_string())
    }
}

pub type Result<T, E = BookmarkError> = std::result::Result<T, E>;
