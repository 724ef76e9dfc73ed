use starshelf::storage::{KeyValueStore, LocalStorage, MemoryStore};

async fn exercise_key_value(store: &dyn KeyValueStore) {
    assert_eq!(store.get("repositories").await.unwrap(), None);

    store.set("repositories", "[]").await.unwrap();
    assert_eq!(store.get("repositories").await.unwrap().as_deref(), Some("[]"));

    // Overwrite replaces the value
    store.set("repositories", "[1]").await.unwrap();
    assert_eq!(store.get("repositories").await.unwrap().as_deref(), Some("[1]"));

    // Other keys are independent
    store.set("repos", "legacy").await.unwrap();
    store.remove("repositories").await.unwrap();
    assert_eq!(store.get("repositories").await.unwrap(), None);
    assert_eq!(store.get("repos").await.unwrap().as_deref(), Some("legacy"));

    // Removing an absent key is fine
    store.remove("repositories").await.unwrap();
}

#[tokio::test]
async fn test_memory_store_semantics() {
    let store = MemoryStore::new();
    exercise_key_value(&store).await;
}

#[tokio::test]
async fn test_in_memory_database_semantics() {
    let store = LocalStorage::in_memory().await.expect("in-memory database should open");
    exercise_key_value(&store).await;
}

#[tokio::test]
async fn test_database_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("starshelf.db");

    {
        let store = LocalStorage::open(&path).await.unwrap();
        store.set("repositories", r#"[{"id":1}]"#).await.unwrap();
    }
    assert!(path.exists());

    let reopened = LocalStorage::open(&path).await.unwrap();
    assert_eq!(
        reopened.get("repositories").await.unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[tokio::test]
async fn test_memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let handle = store.clone();
    store.set("k", "v").await.unwrap();
    assert_eq!(handle.get("k").await.unwrap().as_deref(), Some("v"));
}
