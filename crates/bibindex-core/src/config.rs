//! Storage configuration
//!
//! Where the two index files live. Loaded from TOML:
//!
//! ```toml
//! records_path = "/var/lib/bibindex/titleToArticle.bin"
//! author_index_path = "/var/lib/bibindex/authorToTitles.bin"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory name used beneath the platform data directory
const DATA_DIR_NAME: &str = "bibindex";
/// File holding the title to article map
pub const RECORDS_FILE_NAME: &str = "titleToArticle.bin";
/// File holding the author to titles map
pub const AUTHOR_INDEX_FILE_NAME: &str = "authorToTitles.bin";

/// Paths of the two index files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Title to article map
    pub records_path: PathBuf,
    /// Author to titles map
    pub author_index_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::in_dir(default_data_dir())
    }
}

impl StorageConfig {
    /// Both files under `dir` with their default names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            records_path: dir.join(RECORDS_FILE_NAME),
            author_index_path: dir.join(AUTHOR_INDEX_FILE_NAME),
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Encode(e.to_string()))
    }

    /// Read and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Create the parent directories of both files
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        for path in [&self.records_path, &self.author_index_path] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::Io(format!("{}: {}", parent.display(), e)))?;
            }
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.records_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("records_path is empty".to_string()));
        }

        if self.author_index_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("author_index_path is empty".to_string()));
        }

        if self.records_path == self.author_index_path {
            return Err(ConfigError::Invalid(
                "records_path and author_index_path must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// `<data dir>/bibindex`, or the working directory when there is none
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.records_path.ends_with(RECORDS_FILE_NAME));
        assert!(config.author_index_path.ends_with(AUTHOR_INDEX_FILE_NAME));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StorageConfig::in_dir("/tmp/bib");
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("records_path"));
        assert_eq!(StorageConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_from_toml_missing_field() {
        let err = StorageConfig::from_toml(r#"records_path = "a.bin""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_identical_paths_rejected() {
        let config = StorageConfig {
            records_path: PathBuf::from("same.bin"),
            author_index_path: PathBuf::from("same.bin"),
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = StorageConfig {
            records_path: PathBuf::new(),
            author_index_path: PathBuf::from("authors.bin"),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bibindex.toml");
        std::fs::write(
            &path,
            "records_path = \"r.bin\"\nauthor_index_path = \"a.bin\"\n",
        )
        .unwrap();

        let config = StorageConfig::load(&path).unwrap();
        assert_eq!(config.records_path, PathBuf::from("r.bin"));

        let err = StorageConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
