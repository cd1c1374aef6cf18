//! Tests for the JSON-file record store.

use mediavault_core::{MediaRecord, StoredPath};
use mediavault_database::JsonFileMediaRepository;
use mediavault_error::RepositoryErrorKind;
use mediavault_interface::MediaRepository;
use tempfile::TempDir;

fn record(path: &str, product: &str, seller: &str) -> MediaRecord {
    MediaRecord::new(StoredPath::from(path), product, seller)
}

#[tokio::test]
async fn test_missing_file_opens_empty() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonFileMediaRepository::open(temp_dir.path().join("records.json"))
        .await
        .unwrap();

    assert!(repo.is_empty().await.unwrap());
    assert!(!repo.path().exists());
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("records.json");

    let saved = {
        let repo = JsonFileMediaRepository::open(&path).await.unwrap();
        repo.save(record("a.png", "p1", "s1")).await.unwrap();
        repo.save(record("b.webp", "p1", "s2")).await.unwrap()
    };

    let reopened = JsonFileMediaRepository::open(&path).await.unwrap();
    assert_eq!(reopened.len().await.unwrap(), 2);
    assert_eq!(reopened.find_by_id(&saved.id).await.unwrap(), Some(saved));
    assert_eq!(reopened.find_by_seller_id("s1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_document_uses_camel_case_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");
    let repo = JsonFileMediaRepository::open(&path).await.unwrap();
    repo.save(record("a.png", "p1", "s1")).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"imagePath\": \"a.png\""));
    assert!(text.contains("\"productId\": \"p1\""));
    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
}

#[tokio::test]
async fn test_delete_persists_and_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");

    let repo = JsonFileMediaRepository::open(&path).await.unwrap();
    let saved = repo.save(record("a.png", "p1", "s1")).await.unwrap();
    repo.delete_by_id(&saved.id).await.unwrap();
    repo.delete_by_id(&saved.id).await.unwrap();

    let reopened = JsonFileMediaRepository::open(&path).await.unwrap();
    assert!(reopened.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_corrupt_file_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let err = JsonFileMediaRepository::open(&path).await.unwrap_err();
    assert!(matches!(err.repository_kind(), Some(RepositoryErrorKind::Load(_))));
}

#[tokio::test]
async fn test_delete_keeps_records_saved_through_another_handle() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");

    let first = JsonFileMediaRepository::open(&path).await.unwrap();
    let second = JsonFileMediaRepository::open(&path).await.unwrap();

    let old = first.save(record("old.png", "p1", "s1")).await.unwrap();
    let fresh = second.save(record("fresh.png", "p2", "s2")).await.unwrap();
    first.delete_by_id(&old.id).await.unwrap();

    let reopened = JsonFileMediaRepository::open(&path).await.unwrap();
    assert_eq!(reopened.find_by_id(&old.id).await.unwrap(), None);
    assert_eq!(reopened.find_by_id(&fresh.id).await.unwrap(), Some(fresh));
    assert_eq!(reopened.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_reads_see_writes_from_another_handle() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");

    let reader = JsonFileMediaRepository::open(&path).await.unwrap();
    let writer = JsonFileMediaRepository::open(&path).await.unwrap();
    let saved = writer.save(record("a.png", "p1", "s1")).await.unwrap();

    assert_eq!(reader.find_by_product_id("p1").await.unwrap(), vec![saved]);
}

#[tokio::test]
async fn test_find_by_seller_and_product() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonFileMediaRepository::open(temp_dir.path().join("records.json"))
        .await
        .unwrap();
    let wanted = repo.save(record("a.png", "p1", "s1")).await.unwrap();
    repo.save(record("b.png", "p1", "s2")).await.unwrap();
    repo.save(record("c.png", "p2", "s1")).await.unwrap();

    let found = repo.find_by_seller_and_product("s1", "p1").await.unwrap();
    assert_eq!(found, vec![wanted]);
    assert!(repo.find_by_seller_and_product("s2", "p2").await.unwrap().is_empty());
}
