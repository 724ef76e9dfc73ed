//! Remote metadata source abstraction.
//!
//! This module defines the interface the fetcher uses to read a repository from a
//! remote source, along with the wire representation that source returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupCause;
use crate::model::RepositoryId;

pub mod factory;
pub mod github;

pub use factory::create_backend;
pub use github::GithubBackend;

/// Repository as returned by the remote source, before normalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub id: RepositoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub owner: RemoteOwner,
}

/// Owner object nested in a [`RemoteRepository`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteOwner {
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
}

/// Source of repository metadata.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait MetadataBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "github").
    fn backend_type(&self) -> &str;

    /// Read the repository `owner/repo`.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RemoteRepository, LookupCause>;
}
