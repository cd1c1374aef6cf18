//! Tests for the in-memory record store.

use mediavault_core::{MediaRecord, StoredPath};
use mediavault_database::InMemoryMediaRepository;
use mediavault_interface::MediaRepository;

fn record(path: &str, product: &str, seller: &str) -> MediaRecord {
    MediaRecord::new(StoredPath::from(path), product, seller)
}

#[tokio::test]
async fn test_save_and_find_by_id() {
    let repo = InMemoryMediaRepository::new();
    let saved = repo.save(record("a.png", "p1", "s1")).await.unwrap();

    let found = repo.find_by_id(&saved.id).await.unwrap();
    assert_eq!(found, Some(saved));
    assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_find_by_product_and_seller() {
    let repo = InMemoryMediaRepository::with_records([
        record("a.png", "p1", "s1"),
        record("b.png", "p1", "s2"),
        record("c.png", "p2", "s1"),
    ]);

    let p1 = repo.find_by_product_id("p1").await.unwrap();
    assert_eq!(p1.len(), 2);
    assert!(p1.iter().all(|r| r.product_id == "p1"));

    let s1 = repo.find_by_seller_id("s1").await.unwrap();
    assert_eq!(s1.len(), 2);
    assert!(s1.iter().all(|r| r.seller_id == "s1"));

    assert!(repo.find_by_product_id("p3").await.unwrap().is_empty());

    let both = repo.find_by_seller_and_product("s1", "p1").await.unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].image_path, StoredPath::from("a.png"));
    assert!(repo.find_by_seller_and_product("s2", "p2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_replaces_existing_id() {
    let repo = InMemoryMediaRepository::new();
    let mut saved = repo.save(record("a.png", "p1", "s1")).await.unwrap();

    saved.product_id = "p2".to_string();
    repo.save(saved.clone()).await.unwrap();

    assert_eq!(repo.len().await, 1);
    assert!(repo.find_by_product_id("p1").await.unwrap().is_empty());
    assert_eq!(repo.find_by_product_id("p2").await.unwrap(), vec![saved]);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repo = InMemoryMediaRepository::new();
    let saved = repo.save(record("a.png", "p1", "s1")).await.unwrap();

    repo.delete_by_id(&saved.id).await.unwrap();
    repo.delete_by_id(&saved.id).await.unwrap();
    repo.delete_by_id("never-existed").await.unwrap();

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_clones_share_records() {
    let repo = InMemoryMediaRepository::new();
    let other = repo.clone();

    other.save(record("a.png", "p1", "s1")).await.unwrap();
    assert_eq!(repo.len().await, 1);

    repo.clear().await;
    assert!(other.is_empty().await);
}
