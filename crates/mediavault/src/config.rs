//! Layered configuration for the mediavault binary.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (include_str! from mediavault.toml)
//! 2. `~/.config/mediavault/mediavault.toml`
//! 3. `./mediavault.toml`
//! 4. An explicit file (the `--config` flag)
//! 5. `MEDIAVAULT__SECTION__KEY` environment variables

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use derive_setters::Setters;
use mediavault_cascade::ConsumerConfig;
use mediavault_error::{ConfigError, MediaVaultResult};
use mediavault_storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../mediavault.toml");

/// Where media records are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct RecordsConfig {
    /// JSON document holding all records
    path: PathBuf,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("uploads/records.json"),
        }
    }
}

/// Complete mediavault configuration.
///
/// # Example
///
/// ```toml
/// [storage]
/// root_directory = "/var/lib/mediavault/media"
///
/// [records]
/// path = "/var/lib/mediavault/records.json"
///
/// [consumer]
/// topic = "product-deleted"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Setters)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct MediaVaultConfig {
    /// Content store settings
    storage: StorageConfig,
    /// Record store settings
    records: RecordsConfig,
    /// Event listener settings
    consumer: ConsumerConfig,
}

impl MediaVaultConfig {
    /// Load configuration from every source, optionally with an explicit file.
    ///
    /// # Errors
    ///
    /// Returns error if a source cannot be parsed, the explicit file is
    /// missing, or the merged result is invalid.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> MediaVaultResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mediavault/mediavault.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("mediavault").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEDIAVAULT")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Load a single file on top of the bundled defaults, ignoring the
    /// environment and user files.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the result is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> MediaVaultResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).required(true));
        Self::finish(builder)
    }

    /// Parse configuration from a TOML string on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not valid configuration.
    pub fn from_toml(toml: &str) -> MediaVaultResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns error for an invalid storage section or a zero channel capacity.
    pub fn validate(&self) -> MediaVaultResult<()> {
        self.storage.validate()?;

        if *self.consumer.channel_capacity() == 0 {
            return Err(ConfigError::new("consumer.channel_capacity must be greater than zero").into());
        }
        if self.consumer.topic().trim().is_empty() {
            return Err(ConfigError::new("consumer.topic must not be empty").into());
        }
        if self.records.path.as_os_str().is_empty() {
            return Err(ConfigError::new("records.path must not be empty").into());
        }

        Ok(())
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> MediaVaultResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        debug!(
            root = %config.storage.root_directory().display(),
            records = %config.records.path.display(),
            topic = %config.consumer.topic(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
