mod common;

use std::sync::Arc;

use golinks::domain::entities::Entry;
use golinks::domain::registry::{CorruptFilePolicy, RedirectRegistry, RegistryError};
use golinks::infrastructure::persistence::JsonFileStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_state_survives_reload() {
    let dir = TempDir::new().unwrap();

    let registry = common::open_registry(&dir).await;
    registry.add("a", "http://a.example").await.unwrap();
    registry.add("b", "https://b.example/x").await.unwrap();
    registry.add("c", "ftp://c.example").await.unwrap();
    assert!(registry.delete("b").await.unwrap());
    drop(registry);

    let reloaded = common::open_registry(&dir).await;
    assert_eq!(
        reloaded.list().await,
        vec![
            Entry::new("a", "http://a.example"),
            Entry::new("c", "ftp://c.example"),
        ]
    );
}

#[tokio::test]
async fn test_flush_persists_request_counts() {
    let dir = TempDir::new().unwrap();
    let registry = common::open_registry(&dir).await;
    registry.add("a", "http://a.example").await.unwrap();

    registry.resolve("a").await;
    registry.resolve("a").await;
    assert_eq!(common::read_persisted(&dir)[0].request_count, 0);

    registry.flush().await.unwrap();
    assert_eq!(common::read_persisted(&dir)[0].request_count, 2);

    let reloaded = common::open_registry(&dir).await;
    assert_eq!(reloaded.resolve("a").await.unwrap().request_count, 3);
}

#[tokio::test]
async fn test_reads_legacy_field_names() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        common::redirects_file(&dir),
        r#"[{"Shortname":"wiki","Url":"http://example.com/Wiki","Requests":7}]"#,
    )
    .unwrap();

    let registry = common::open_registry(&dir).await;

    assert_eq!(
        registry.list().await,
        vec![Entry {
            shortname: "wiki".to_string(),
            target: "http://example.com/Wiki".to_string(),
            request_count: 7,
        }]
    );
}

#[tokio::test]
async fn test_corrupt_file_reset_policy_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(common::redirects_file(&dir), "{not json").unwrap();

    let registry = common::open_registry(&dir).await;
    assert!(registry.is_empty().await);

    registry.add("a", "http://a.example").await.unwrap();
    assert_eq!(
        common::read_persisted(&dir),
        vec![Entry::new("a", "http://a.example")]
    );
}

#[tokio::test]
async fn test_corrupt_file_fail_policy() {
    let dir = TempDir::new().unwrap();
    std::fs::write(common::redirects_file(&dir), "{not json").unwrap();

    let store = Arc::new(JsonFileStore::new(common::redirects_file(&dir)));
    let result = RedirectRegistry::open(store, CorruptFilePolicy::Fail).await;

    assert!(matches!(result, Err(RegistryError::Load(_))));
    assert_eq!(
        std::fs::read_to_string(common::redirects_file(&dir)).unwrap(),
        "{not json"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_all_persist() {
    let dir = TempDir::new().unwrap();
    let registry = common::open_registry(&dir).await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry
                .add(&format!("name{i}"), &format!("http://host{i}.example"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let persisted = common::read_persisted(&dir);
    assert_eq!(persisted.len(), 16);
    assert_eq!(persisted, registry.list().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_add_single_winner() {
    let dir = TempDir::new().unwrap();
    let registry = common::open_registry(&dir).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry.add("same", &format!("http://host{i}.example")).await
        }));
    }

    let mut added = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => added += 1,
            Err(RegistryError::DuplicateShortname { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(added, 1);
    assert_eq!(common::read_persisted(&dir).len(), 1);
}
