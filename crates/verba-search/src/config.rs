//! Handles application configuration: Qdrant settings, the search
//! collection, chunking and embedding parameters.
//! Configuration is typically loaded from a `config.toml` file.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use verba_embed::EmbeddingConfig;

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_COLLECTION_NAME};

const APP_NAME: &str = "verba";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "VERBA_CONFIG_PATH";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// Configuration specific to the indexing process.
pub struct IndexingConfig {
    /// Number of consecutive captions merged into one chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Maximum number of concurrent embedding requests while indexing.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    /// Number of points per Qdrant upsert batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_concurrent_requests: default_max_concurrent_requests(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_max_concurrent_requests() -> usize {
    8
}

fn default_batch_size() -> usize {
    64
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// Top-level application configuration.
pub struct AppConfig {
    /// URL of the Qdrant gRPC endpoint.
    #[serde(default = "default_qdrant_url")]
    pub qdrant_url: String,
    /// Name of the collection holding every indexed video.
    #[serde(default = "default_collection_name")]
    pub collection_name: String,
    /// Indexing configuration settings.
    #[serde(default)]
    pub indexing: IndexingConfig,
    /// Embedding provider configuration settings.
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            qdrant_url: default_qdrant_url(),
            collection_name: default_collection_name(),
            indexing: IndexingConfig::default(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

fn default_qdrant_url() -> String {
    "http://localhost:6334".to_string()
}

fn default_collection_name() -> String {
    DEFAULT_COLLECTION_NAME.to_string()
}

impl AppConfig {
    /// Validates that the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.collection_name.is_empty() {
            return Err(anyhow!("collection_name must not be empty"));
        }
        if self.indexing.chunk_size == 0 {
            return Err(anyhow!("indexing.chunk_size must be greater than zero"));
        }
        if self.indexing.max_concurrent_requests == 0 {
            return Err(anyhow!(
                "indexing.max_concurrent_requests must be greater than zero"
            ));
        }
        if self.indexing.batch_size == 0 {
            return Err(anyhow!("indexing.batch_size must be greater than zero"));
        }
        self.embedding
            .validate()
            .map_err(|e| anyhow!(e.to_string()))?;
        Ok(())
    }
}

/// Returns the default path to the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not find config directory"))?
        .join(APP_NAME);
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Resolves the configuration file path, honoring an explicit override and
/// the `VERBA_CONFIG_PATH` environment variable, in that order.
pub fn get_config_path_or_default(override_path: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.clone());
    }
    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(env_path));
    }
    get_config_path()
}

/// Loads the application configuration.
///
/// A missing file is not an error; defaults are returned so first runs work
/// without any setup.
pub fn load_config(override_path: Option<&PathBuf>) -> Result<AppConfig> {
    let path = get_config_path_or_default(override_path)?;
    if !path.exists() {
        log::debug!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Saves the application configuration, creating parent directories as needed.
/// Returns the path written to.
pub fn save_config(config: &AppConfig, override_path: Option<&PathBuf>) -> Result<PathBuf> {
    let path = get_config_path_or_default(override_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content =
        toml::to_string_pretty(config).context("Failed to serialize configuration to TOML")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.qdrant_url, "http://localhost:6334");
        assert_eq!(config.collection_name, DEFAULT_COLLECTION_NAME);
        assert_eq!(config.indexing.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.indexing.max_concurrent_requests, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.collection_name = "my-videos".to_string();
        config.indexing.chunk_size = 5;

        save_config(&config, Some(&path)).unwrap();
        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "collection_name = \"lectures\"\n").unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.collection_name, "lectures");
        assert_eq!(loaded.qdrant_url, "http://localhost:6334");
        assert_eq!(loaded.indexing.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[indexing]\nchunk_size = 0\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not toml at all [[").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
