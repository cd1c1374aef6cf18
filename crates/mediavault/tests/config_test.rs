//! Tests for layered configuration loading.

use mediavault::{DEFAULT_MAX_SIZE_BYTES, MediaVaultConfig};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_bundled_defaults() {
    let config = MediaVaultConfig::from_toml("").unwrap();

    assert_eq!(config.storage().root_directory(), Path::new("uploads/media"));
    assert_eq!(*config.storage().max_size_bytes(), DEFAULT_MAX_SIZE_BYTES);
    assert!(config.storage().allows_mime_type("image/webp"));
    assert!(config.storage().allows_extension("jpeg"));
    assert_eq!(config.records().path(), Path::new("uploads/records.json"));
    assert_eq!(config.consumer().topic(), "product-deleted");
    assert_eq!(config.consumer().group_id(), "media-service");
    assert_eq!(*config.consumer().channel_capacity(), 64);
}

#[test]
fn test_bundled_defaults_match_code_defaults() {
    assert_eq!(
        MediaVaultConfig::from_toml("").unwrap(),
        MediaVaultConfig::default()
    );
}

#[test]
fn test_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("override.toml");
    std::fs::write(
        &path,
        r#"
[storage]
root_directory = "/srv/media"
max_size_bytes = 1024
allowed_extensions = ["png"]

[consumer]
topic = "catalog.product.deleted"
"#,
    )
    .unwrap();

    let config = MediaVaultConfig::from_file(&path).unwrap();

    assert_eq!(config.storage().root_directory(), Path::new("/srv/media"));
    assert_eq!(*config.storage().max_size_bytes(), 1024);
    assert!(config.storage().allows_extension("png"));
    assert!(!config.storage().allows_extension("webp"));
    // Untouched keys keep their defaults
    assert!(config.storage().allows_mime_type("image/webp"));
    assert_eq!(config.consumer().topic(), "catalog.product.deleted");
    assert_eq!(config.consumer().group_id(), "media-service");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(MediaVaultConfig::from_file(temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_invalid_values_rejected() {
    assert!(MediaVaultConfig::from_toml("[storage]\nmax_size_bytes = 0\n").is_err());
    assert!(MediaVaultConfig::from_toml("[storage]\nallowed_mime_types = []\n").is_err());
    assert!(MediaVaultConfig::from_toml("[consumer]\nchannel_capacity = 0\n").is_err());
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(MediaVaultConfig::from_toml("[storage]\nroot = \"/tmp\"\n").is_err());
}
