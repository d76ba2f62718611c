use serde::Deserialize;

use crate::infrastructure::registry::{
    ReadFailurePolicy, RegistryConfig, WriteMode, DEFAULT_REGISTRY_KEY,
};
use crate::infrastructure::storage::{S3Config, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WriteModeSetting {
    #[default]
    Overwrite,
    Conditional,
}

/// Where the registry document lives and how it is read and written
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// `memory` or `s3`
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
    #[serde(default)]
    pub read_failure: ReadFailurePolicy,
    #[serde(default)]
    pub write_mode: WriteModeSetting,
    /// Attempts per update when `write_mode` is `conditional`
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_key() -> String {
    DEFAULT_REGISTRY_KEY.to_string()
}

fn default_max_attempts() -> u32 {
    3
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            bucket: None,
            key: default_key(),
            region: None,
            endpoint_url: None,
            force_path_style: false,
            read_failure: ReadFailurePolicy::default(),
            write_mode: WriteModeSetting::default(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl StoreConfig {
    /// Blob store backend settings
    pub fn storage_config(&self) -> anyhow::Result<StorageConfig> {
        let storage_type: StorageType = self.backend.parse()?;

        match storage_type {
            StorageType::InMemory => Ok(StorageConfig::in_memory()),
            StorageType::S3 => {
                let bucket = self
                    .bucket
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("store.bucket is required for the s3 backend"))?;

                let mut s3 = S3Config::new(bucket).with_force_path_style(self.force_path_style);

                if let Some(region) = &self.region {
                    s3 = s3.with_region(region);
                }

                if let Some(endpoint_url) = &self.endpoint_url {
                    s3 = s3.with_endpoint_url(endpoint_url);
                }

                Ok(StorageConfig::s3(s3))
            }
        }
    }

    /// Registry service settings
    pub fn registry_config(&self) -> RegistryConfig {
        let write_mode = match self.write_mode {
            WriteModeSetting::Overwrite => WriteMode::Overwrite,
            WriteModeSetting::Conditional => WriteMode::Conditional {
                max_attempts: self.max_attempts,
            },
        };

        RegistryConfig::new(&self.key)
            .with_read_failure(self.read_failure)
            .with_write_mode(write_mode)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.store.key, "storage_units.json");
        assert_eq!(config.store.registry_config(), RegistryConfig::default());
    }

    #[test]
    fn test_memory_backend() {
        let storage = StoreConfig::default().storage_config().unwrap();
        assert_eq!(storage.storage_type(), StorageType::InMemory);
    }

    #[test]
    fn test_s3_backend_requires_bucket() {
        let store = StoreConfig {
            backend: "s3".to_string(),
            ..StoreConfig::default()
        };
        assert!(store.storage_config().is_err());
    }

    #[test]
    fn test_s3_backend_settings() {
        let store = StoreConfig {
            backend: "s3".to_string(),
            bucket: Some("units".to_string()),
            endpoint_url: Some("http://localhost:9000".to_string()),
            force_path_style: true,
            ..StoreConfig::default()
        };

        match store.storage_config().unwrap() {
            StorageConfig::S3(s3) => {
                assert_eq!(s3.bucket, "units");
                assert_eq!(s3.endpoint_url.as_deref(), Some("http://localhost:9000"));
                assert!(s3.force_path_style);
            }
            other => panic!("unexpected storage config: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_backend() {
        let store = StoreConfig {
            backend: "postgres".to_string(),
            ..StoreConfig::default()
        };
        assert!(store.storage_config().is_err());
    }

    #[test]
    fn test_conditional_write_mode() {
        let store = StoreConfig {
            write_mode: WriteModeSetting::Conditional,
            max_attempts: 5,
            read_failure: ReadFailurePolicy::Propagate,
            ..StoreConfig::default()
        };

        let registry = store.registry_config();
        assert_eq!(registry.write_mode, WriteMode::Conditional { max_attempts: 5 });
        assert_eq!(registry.read_failure, ReadFailurePolicy::Propagate);
    }

    #[test]
    fn test_deserialize_store_section() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "store": {
                "backend": "s3",
                "bucket": "units",
                "read_failure": "propagate",
                "write_mode": "conditional"
            }
        }))
        .unwrap();

        assert_eq!(config.store.bucket.as_deref(), Some("units"));
        assert_eq!(config.store.max_attempts, 3);
        assert_eq!(config.store.write_mode, WriteModeSetting::Conditional);
        assert_eq!(config.server.port, 8080);
    }
}
