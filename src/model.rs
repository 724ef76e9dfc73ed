//! Bookmarked repository records and the edit form applied to them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_DESCRIPTION;

/// Remote-assigned identifier of a repository.
///
/// GitHub hands out integers, but older mirrors and other sources may carry
/// string ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryId {
    Number(u64),
    Text(String),
}

impl RepositoryId {
    /// Parse a user-typed id: digits become a number, anything else stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => RepositoryId::Number(n),
            Err(_) => RepositoryId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryId::Number(n) => write!(f, "{n}"),
            RepositoryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RepositoryId {
    fn from(n: u64) -> Self {
        RepositoryId::Number(n)
    }
}

impl From<&str> for RepositoryId {
    fn from(s: &str) -> Self {
        RepositoryId::Text(s.to_string())
    }
}

/// Owner profile captured when the repository was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub profile_url: String,
    pub avatar_url: String,
}

/// A bookmarked repository as persisted in the durable mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: RepositoryId,
    pub name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub owner: Owner,
}

impl RepositoryRecord {
    /// Overwrite the locally editable fields. `id` and `owner` are never touched.
    pub fn apply(&mut self, edit: &RepositoryEdit) {
        self.name = edit.name.clone();
        self.description = edit.description.clone();
        self.stars = edit.stars;
        self.forks = edit.forks;
    }

    /// The current editable fields, used to prefill an edit form.
    pub fn to_edit(&self) -> RepositoryEdit {
        RepositoryEdit {
            name: self.name.clone(),
            description: self.description.clone(),
            stars: self.stars,
            forks: self.forks,
        }
    }
}

/// Whole-record replacement of the fields a user may edit locally.
///
/// Star and fork counts edited here are local annotations and drift from the
/// remote values over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEdit {
    pub name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
}

/// Normalize a remote description: null, absent and empty all become the placeholder.
pub fn description_or_default(description: Option<String>) -> String {
    match description {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_DESCRIPTION.to_string(),
    }
}
