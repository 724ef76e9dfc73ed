//! Turns a user-supplied `(owner, repo)` pair into a normalized [`RepositoryRecord`].
//!
//! The fetcher validates input, performs a single lookup against its backend, and
//! normalizes the response. It never writes to the bookmark store; persisting the
//! result is left to the caller.

use log::{error, info};
use std::sync::Arc;

use crate::backend::{MetadataBackend, RemoteRepository};
use crate::error::{BookmarkError, Result};
use crate::model::{description_or_default, Owner, RepositoryRecord};

/// Fetches repository metadata through a [`MetadataBackend`].
#[derive(Clone)]
pub struct MetadataFetcher {
    backend: Arc<dyn MetadataBackend>,
}

impl MetadataFetcher {
    pub fn new(backend: Arc<dyn MetadataBackend>) -> Self {
        Self { backend }
    }

    /// Fetch and normalize `owner_id/repo_id`.
    ///
    /// # Errors
    /// - [`BookmarkError::InvalidInput`] if either identifier is blank; no request is made
    /// - [`BookmarkError::RemoteLookup`] on a non-success status, transport failure,
    ///   or unreadable body
    pub async fn fetch(&self, owner_id: &str, repo_id: &str) -> Result<RepositoryRecord> {
        let owner_id = owner_id.trim();
        let repo_id = repo_id.trim();
        if owner_id.is_empty() || repo_id.is_empty() {
            return Err(BookmarkError::InvalidInput(
                "both owner and repository must be provided".to_string(),
            ));
        }

        match self.backend.get_repository(owner_id, repo_id).await {
            Ok(remote) => {
                info!("✅ Fetched {}/{} from {}", owner_id, repo_id, self.backend.backend_type());
                Ok(normalize(remote))
            }
            Err(cause) => {
                error!("❌ Failed to fetch {}/{}: {}", owner_id, repo_id, cause);
                Err(BookmarkError::RemoteLookup {
                    owner: owner_id.to_string(),
                    repo: repo_id.to_string(),
                    cause,
                })
            }
        }
    }
}

/// Map the remote shape onto the persisted record.
pub fn normalize(remote: RemoteRepository) -> RepositoryRecord {
    RepositoryRecord {
        id: remote.id,
        name: remote.name,
        description: description_or_default(remote.description),
        stars: remote.stargazers_count,
        forks: remote.forks_count,
        owner: Owner {
            name: remote.owner.login,
            profile_url: remote.owner.html_url,
            avatar_url: remote.owner.avatar_url,
        },
    }
}
