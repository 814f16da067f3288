//! Per-node overrides, read once at startup from an INI file with one section per node:
//!
//! ```ini
//! [alice]
//! host = 10.0.0.5:9000
//! ```

use std::{collections::HashMap, path::Path};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::NodeId;

#[derive(Debug, thiserror::Error)]
#[error("invalid node configuration: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NodeSection {
    /// Complete `host:port` address used instead of the default convention.
    pub host: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    sections: HashMap<String, NodeSection>,
}

impl NodeConfig {
    /// A missing file is an empty configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder().add_source(File::from(path).format(FileFormat::Ini).required(false)).build()?;
        Self::from_settings(settings)
    }

    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder().add_source(File::from_str(content, FileFormat::Ini)).build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        Ok(Self {
            sections: settings.try_deserialize()?,
        })
    }

    /// Section names are stored lowercased, so lookup ignores the case of the node id.
    pub fn section(&self, node: &NodeId) -> Option<&NodeSection> {
        self.sections.get(node.as_str()).or_else(|| self.sections.get(&node.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = NodeConfig::load(&dir.path().join("nodes.ini")).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn load_sections_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.ini");
        std::fs::write(&path, "[alice]\nhost = 10.0.0.5:9000\n\n[carol]\nnetwork = regtest\n").unwrap();

        let config = NodeConfig::load(&path).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.section(&"alice".into()).and_then(|s| s.host.as_deref()), Some("10.0.0.5:9000"));
        assert_eq!(config.section(&"carol".into()), Some(&NodeSection { host: None }));
        assert_eq!(config.section(&"dave".into()), None);
    }

    #[test]
    fn section_lookup_ignores_case() {
        let config = NodeConfig::from_ini_str("[Alice]\nHost = alice.internal:10009\n").unwrap();
        assert_eq!(config.section(&"Alice".into()).and_then(|s| s.host.as_deref()), Some("alice.internal:10009"));
        assert_eq!(config.section(&"alice".into()).and_then(|s| s.host.as_deref()), Some("alice.internal:10009"));
    }
}
