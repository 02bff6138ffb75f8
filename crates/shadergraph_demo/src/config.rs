// SPDX-License-Identifier: MIT OR Apache-2.0
//! Demo configuration, stored as RON.

use serde::{Deserialize, Serialize};
use shadergraph_core::ConnectionPolicy;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SHADERGRAPH_CONFIG";

/// Config errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid RON for [`DemoConfig`]
    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serializing the config failed
    #[error("Config serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// Written by a newer build
    #[error("Config version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },
}

/// A simulated context-menu pick run after seeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoInsert {
    /// Menu category
    pub category: String,
    /// Menu label
    pub label: String,
    /// Where the pointer was
    pub position: [f32; 2],
}

impl Default for DemoInsert {
    fn default() -> Self {
        Self {
            category: "Math".to_string(),
            label: "Multiply".to_string(),
            position: [10.0, 20.0],
        }
    }
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Format version
    pub version: u32,
    /// Name given to the graph
    pub graph_name: String,
    /// Build the PBR + split example on startup
    pub seed_example: bool,
    /// Port type checking for new connections
    pub connection_policy: ConnectionPolicy,
    /// Extra `tracing` filter directive
    pub log_directive: String,
    /// Menu pick to run after seeding
    pub demo_insert: Option<DemoInsert>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            graph_name: "Shader Graph".to_string(),
            seed_example: true,
            connection_policy: ConnectionPolicy::Permissive,
            log_directive: "shadergraph=debug".to_string(),
            demo_insert: Some(DemoInsert::default()),
        }
    }
}

impl DemoConfig {
    /// Parse a config from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = ron::from_str(content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_FORMAT_VERSION,
            });
        }

        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Save as pretty RON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        let content = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load a config file, writing the defaults there if it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Config path from the first argument, else the environment
    pub fn locate(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
        args.next()
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.seed_example);
        assert_eq!(config.connection_policy, ConnectionPolicy::Permissive);
        assert_eq!(config.demo_insert.unwrap().label, "Multiply");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config =
            DemoConfig::from_ron("(graph_name: \"Metal\", connection_policy: Strict)").unwrap();
        assert_eq!(config.graph_name, "Metal");
        assert_eq!(config.connection_policy, ConnectionPolicy::Strict);
        assert!(config.seed_example);
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = DemoConfig::from_ron("(version: 99)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion { found: 99, supported: CONFIG_FORMAT_VERSION }
        ));
    }

    #[test]
    fn test_rejects_malformed_ron() {
        let err = DemoConfig::from_ron("(seed_example: maybe)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("shadergraph-config-{}.ron", std::process::id()));
        let config = DemoConfig {
            graph_name: "Saved".to_string(),
            demo_insert: None,
            ..DemoConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = DemoConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let path = std::env::temp_dir()
            .join(format!("shadergraph-created-{}.ron", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let created = DemoConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        let reloaded = DemoConfig::load_or_create(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(created, reloaded);
    }

    #[test]
    fn test_locate_prefers_argument() {
        let path = DemoConfig::locate(vec!["demo.ron".to_string()].into_iter());
        assert_eq!(path, Some(PathBuf::from("demo.ron")));
    }
}
