//! Constants used throughout the application
//!
//! This module centralizes magic strings, user-facing text, and default values.

/// Placeholder stored when the remote source has no description.
pub const DEFAULT_DESCRIPTION: &str = "Sem descrição";

// Defaults
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_STORAGE_KEY: &str = "repositories";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";
pub const APP_DIR_NAME: &str = "starshelf";
pub const DATABASE_FILE_NAME: &str = "starshelf.db";
pub const LOG_FILE_NAME: &str = "starshelf.log";
pub const CONFIG_FILE_NAME: &str = "starshelf.toml";

// Success Messages
pub const SUCCESS_REPOSITORY_ADDED: &str = "✅ Repository added";
pub const SUCCESS_REPOSITORY_UPDATED: &str = "✅ Repository updated";
pub const SUCCESS_REPOSITORY_DELETED: &str = "✅ Repository deleted";
pub const SUCCESS_REPOSITORIES_CLEARED: &str = "✅ All repositories cleared";

// Error Messages
pub const ERROR_MISSING_FIELDS: &str = "❌ Fill in both the owner and the repository";
pub const ERROR_REPOSITORY_NOT_FOUND: &str = "❌ Repository not found";
pub const ERROR_NO_MATCHING_BOOKMARK: &str = "❌ No bookmark with that id";

// Prompts
pub const PROMPT_CONFIRM_DELETE: &str = "Delete this repository? [y/N] ";
pub const PROMPT_CONFIRM_CLEAR: &str = "Remove every bookmarked repository? [y/N] ";
pub const INFO_CANCELLED: &str = "Cancelled";
pub const INFO_EMPTY_LIST: &str = "No bookmarked repositories yet";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
