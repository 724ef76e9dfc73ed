//! Starshelf - bookmark GitHub repositories locally
//!
//! This library fetches repository metadata (name, description, stars, forks,
//! owner) from the GitHub REST API and keeps a local list of bookmarked
//! repositories that can be edited and deleted.
//!
//! # Modules
//!
//! * [`bookmarks`] - The bookmark store and its durable mirror
//! * [`fetcher`] - Remote lookup and normalization of repository metadata
//! * [`backend`] - Remote metadata sources (GitHub)
//! * [`storage`] - Key-value persistence
//! * [`config`] - Application configuration management

/// Remote metadata source abstraction and the GitHub implementation
pub mod backend;

/// Bookmark store keeping the in-memory list and its durable copy in step
pub mod bookmarks;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types surfaced to callers
pub mod error;

/// Metadata fetcher turning owner/repo pairs into records
pub mod fetcher;

/// Logging setup for file output
pub mod logger;

/// Repository records and edit forms
pub mod model;

/// Repository layer for database operations
pub mod repositories;

/// Key-value storage backends
pub mod storage;

pub use bookmarks::{BookmarkStore, SharedBookmarkStore};
pub use error::{BookmarkError, LookupCause};
pub use fetcher::MetadataFetcher;
pub use model::{Owner, RepositoryEdit, RepositoryId, RepositoryRecord};
