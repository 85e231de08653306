//! Configuration module
//!
//! Settings are read from a TOML file (`~/.config/identity-admin/config.toml`
//! by default). A missing file yields the defaults; a file that exists but
//! cannot be read or parsed is a configuration error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{default_registry, ContractorAssignment};
use crate::support::errors::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_CREDENTIALS_PATH: &str = "serviceAccountKey.json";

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("identity-admin")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
    /// Replaces the built-in contractor registry when non-empty.
    pub contractors: Vec<ContractorAssignment>,
}

/// Identity provider connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Service account key file (JSON)
    pub credentials_path: PathBuf,
    /// Overrides the project id found in the key file
    pub project_id: Option<String>,
    pub api_base_url: String,
    /// `host:port` of a local auth emulator; disables token exchange
    pub emulator_host: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            project_id: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            emulator_host: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw, path)
    }

    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Registry to apply: the configured list, or the built-in one.
    pub fn contractor_registry(&self) -> Vec<ContractorAssignment> {
        if self.contractors.is_empty() {
            default_registry()
        } else {
            self.contractors.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.provider.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            config.provider.credentials_path,
            PathBuf::from("serviceAccountKey.json")
        );
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.contractor_registry(), default_registry());
    }

    #[test]
    fn test_partial_file_and_registry_override() {
        let raw = r#"
            [provider]
            project_id = "city-works"
            emulator_host = "127.0.0.1:9099"

            [[contractors]]
            uid = "uidA"
            department = "Roads"

            [[contractors]]
            uid = "uidB"
            department = "Water"
        "#;
        let config = AppConfig::from_toml(raw, Path::new("config.toml")).unwrap();

        assert_eq!(config.provider.project_id.as_deref(), Some("city-works"));
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.logging.format, "text");
        assert_eq!(
            config.contractor_registry(),
            vec![
                ContractorAssignment::new("uidA", "Roads"),
                ContractorAssignment::new("uidB", "Water"),
            ]
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[provider\ntimeout_secs = 5").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }
}
