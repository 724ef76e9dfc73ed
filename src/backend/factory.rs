//! Backend factory for creating the metadata backend from configuration.

use anyhow::{anyhow, Result};
use std::time::Duration;

use super::{github::GithubBackend, MetadataBackend};
use crate::config::ApiConfig;

/// Create the metadata backend described by the `[api]` configuration.
///
/// # Errors
/// Returns error if the HTTP client cannot be built (e.g. an invalid user agent).
pub fn create_backend(config: &ApiConfig) -> Result<Box<dyn MetadataBackend>> {
    let backend = GithubBackend::new(
        &config.base_url,
        &config.user_agent,
        Duration::from_secs(config.timeout_secs),
    )
    .map_err(|e| anyhow!("Failed to create GitHub backend: {}", e))?;
    Ok(Box::new(backend))
}
