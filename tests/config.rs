use starshelf::config::{Config, CorruptPolicy};
use starshelf::constants::{DEFAULT_API_BASE_URL, DEFAULT_STORAGE_KEY};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.timeout_secs, 10);
    assert!(config.api.user_agent.starts_with("starshelf/"));
    assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Fail);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zero timeout should fail
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    // Oversized timeout should fail too
    config.api.timeout_secs = 301;
    assert!(config.validate().is_err());

    config.api.timeout_secs = 30;
    config.api.base_url = "api.github.com".to_string();
    assert!(config.validate().is_err());

    config.api.base_url = "http://localhost:8080".to_string();
    config.storage.key = "  ".to_string();
    assert!(config.validate().is_err());

    config.storage.key = "repos".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"https://api.github.com\""));
    assert!(toml_str.contains("key = \"repositories\""));
    assert!(toml_str.contains("on_corrupt = \"fail\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
timeout_secs = 3

[storage]
on_corrupt = "reset"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.api.timeout_secs, 3);
    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Reset);

    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    assert!(!config.logging.enabled);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.api.timeout_secs, default_config.api.timeout_secs);
    assert_eq!(config.storage.key, default_config.storage.key);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_explicit_database_path_wins() {
    let mut config = Config::default();
    config.storage.database_path = "/tmp/elsewhere/bookmarks.db".to_string();
    let path = config.storage.resolve_database_path().unwrap();
    assert_eq!(path, std::path::PathBuf::from("/tmp/elsewhere/bookmarks.db"));
}

#[test]
fn test_generate_config_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Starshelf Configuration File"));
    assert!(content.contains("key = \"repositories\""));

    // The generated file loads back and validates
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.storage.key, DEFAULT_STORAGE_KEY);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[api]\ntimeout_secs = 0\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());
}
