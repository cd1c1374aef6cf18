//! Tests for the media service.

use async_trait::async_trait;
use mediavault::{
    FileSystemMediaStore, InMemoryMediaRepository, MediaRecord, MediaRepository, MediaService,
    MediaVaultResult, PNG_SIGNATURE, RepositoryError, RepositoryErrorKind, ServiceErrorKind,
    StorageConfig, StorageErrorKind, UploadCandidate, ValidationErrorKind,
};
use std::sync::Arc;
use tempfile::TempDir;

struct Fixture {
    temp_dir: TempDir,
    repo: InMemoryMediaRepository,
    service: MediaService,
}

fn fixture() -> Fixture {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileSystemMediaStore::new(StorageConfig::new(temp_dir.path())).unwrap());
    let repo = InMemoryMediaRepository::new();
    let service = MediaService::new(storage, Arc::new(repo.clone()));
    Fixture {
        temp_dir,
        repo,
        service,
    }
}

fn png(name: &str) -> UploadCandidate {
    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend_from_slice(b"pixels");
    UploadCandidate::new(bytes, name, "image/png")
}

fn artifacts(fixture: &Fixture) -> usize {
    std::fs::read_dir(fixture.temp_dir.path()).unwrap().count()
}

#[tokio::test]
async fn test_upload_creates_record_and_artifact() {
    let fixture = fixture();

    let record = fixture
        .service
        .upload_media(&png("photo.png"), "product123", "seller123")
        .await
        .unwrap();

    assert_eq!(record.product_id, "product123");
    assert_eq!(record.seller_id, "seller123");
    assert!(record.image_path.as_str().ends_with(".png"));
    assert_eq!(fixture.repo.find_by_id(&record.id).await.unwrap(), Some(record));
    assert_eq!(artifacts(&fixture), 1);
}

#[tokio::test]
async fn test_upload_requires_product_id() {
    let fixture = fixture();

    for blank in ["", "   "] {
        let err = fixture
            .service
            .upload_media(&png("photo.png"), blank, "seller123")
            .await
            .unwrap_err();
        assert_eq!(err.service_kind(), Some(&ServiceErrorKind::MissingProductId));
    }

    assert_eq!(artifacts(&fixture), 0);
    assert!(fixture.repo.is_empty().await);
}

#[tokio::test]
async fn test_rejected_upload_creates_no_record() {
    let fixture = fixture();

    let err = fixture
        .service
        .upload_media(
            &UploadCandidate::new(b"plain text".to_vec(), "notes.txt", "text/plain"),
            "product123",
            "seller123",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.validation_kind(),
        Some(ValidationErrorKind::UnsupportedMimeType(_))
    ));
    assert!(fixture.repo.is_empty().await);
}

#[tokio::test]
async fn test_get_media_by_id_not_found() {
    let fixture = fixture();

    let err = fixture.service.get_media_by_id("missing").await.unwrap_err();
    assert_eq!(
        err.repository_kind(),
        Some(&RepositoryErrorKind::RecordNotFound("missing".to_string()))
    );
}

#[tokio::test]
async fn test_listing_by_product_and_seller() {
    let fixture = fixture();
    let service = &fixture.service;

    service.upload_media(&png("a.png"), "p1", "s1").await.unwrap();
    service.upload_media(&png("b.png"), "p1", "s2").await.unwrap();
    service.upload_media(&png("c.png"), "p2", "s1").await.unwrap();

    assert_eq!(service.get_media_by_product("p1").await.unwrap().len(), 2);
    assert_eq!(service.get_media_by_seller("s1").await.unwrap().len(), 2);
    assert!(service.get_media_by_product("p9").await.unwrap().is_empty());

    let own = service
        .get_media_by_seller_and_product("s1", "p1")
        .await
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].seller_id, "s1");
    assert_eq!(own[0].product_id, "p1");
    assert!(
        service
            .get_media_by_seller_and_product("s2", "p2")
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_delete_media_checks_ownership() {
    let fixture = fixture();
    let record = fixture
        .service
        .upload_media(&png("a.png"), "p1", "owner")
        .await
        .unwrap();

    let err = fixture
        .service
        .delete_media(&record.id, "intruder")
        .await
        .unwrap_err();
    assert!(matches!(
        err.service_kind(),
        Some(ServiceErrorKind::PermissionDenied { seller_id, .. }) if seller_id == "intruder"
    ));
    assert!(
        err.to_string()
            .contains("You do not have permission to delete this media")
    );
    assert_eq!(artifacts(&fixture), 1);
    assert_eq!(fixture.repo.len().await, 1);

    fixture.service.delete_media(&record.id, "owner").await.unwrap();
    assert_eq!(artifacts(&fixture), 0);
    assert!(fixture.repo.is_empty().await);
}

#[tokio::test]
async fn test_delete_unknown_media() {
    let fixture = fixture();

    let err = fixture
        .service
        .delete_media("missing", "seller123")
        .await
        .unwrap_err();
    assert!(matches!(
        err.repository_kind(),
        Some(RepositoryErrorKind::RecordNotFound(_))
    ));
}

#[tokio::test]
async fn test_open_media_reports_location_and_type() {
    let fixture = fixture();
    let record = fixture
        .service
        .upload_media(&png("photo.PNG"), "p1", "s1")
        .await
        .unwrap();

    let (location, content_type) = fixture.service.open_media(&record.id).await.unwrap();
    assert_eq!(content_type, "image/png");
    let bytes = tokio::fs::read(&location).await.unwrap();
    assert!(bytes.starts_with(&PNG_SIGNATURE));
}

#[tokio::test]
async fn test_open_media_with_missing_artifact() {
    let fixture = fixture();
    let record = fixture
        .service
        .upload_media(&png("photo.png"), "p1", "s1")
        .await
        .unwrap();
    std::fs::remove_file(fixture.temp_dir.path().join(record.image_path.as_str())).unwrap();

    let err = fixture.service.open_media(&record.id).await.unwrap_err();
    assert!(matches!(err.storage_kind(), Some(StorageErrorKind::NotFound(_))));
}

/// Record store that refuses every write.
struct ReadOnlyRepository;

#[async_trait]
impl MediaRepository for ReadOnlyRepository {
    async fn find_by_id(&self, _id: &str) -> MediaVaultResult<Option<MediaRecord>> {
        Ok(None)
    }

    async fn find_by_product_id(&self, _product_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        Ok(Vec::new())
    }

    async fn find_by_seller_id(&self, _seller_id: &str) -> MediaVaultResult<Vec<MediaRecord>> {
        Ok(Vec::new())
    }

    async fn find_by_seller_and_product(
        &self,
        _seller_id: &str,
        _product_id: &str,
    ) -> MediaVaultResult<Vec<MediaRecord>> {
        Ok(Vec::new())
    }

    async fn save(&self, _record: MediaRecord) -> MediaVaultResult<MediaRecord> {
        Err(RepositoryError::new(RepositoryErrorKind::Persist("read-only".to_string())).into())
    }

    async fn delete_by_id(&self, _id: &str) -> MediaVaultResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failed_save_removes_stored_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileSystemMediaStore::new(StorageConfig::new(temp_dir.path())).unwrap());
    let service = MediaService::new(storage, Arc::new(ReadOnlyRepository));

    let err = service
        .upload_media(&png("photo.png"), "p1", "s1")
        .await
        .unwrap_err();

    assert!(matches!(err.repository_kind(), Some(RepositoryErrorKind::Persist(_))));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
