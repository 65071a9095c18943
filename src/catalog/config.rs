//! Serializable catalog configuration.

use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which built-in metrics a catalog enables.
///
/// ```yaml
/// name: strings
/// description: pattern checks for text columns
/// metrics:
///   - count
///   - likeCount
///   - likeRatio
/// ```
///
/// Dependencies are not pulled in implicitly: enabling `likeRatio` without
/// `count` fails when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Name of the catalog.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Metric identifiers to enable, in registration order.
    pub metrics: Vec<String>,
}

impl CatalogConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(ProfilerError::from)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ProfilerError::from)
    }

    /// Load from a YAML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_yaml() {
        let yaml = "name: strings\nmetrics:\n  - count\n  - likeCount\n  - likeRatio\n";
        let config = CatalogConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, "strings");
        assert_eq!(config.description, None);
        assert_eq!(config.metrics, vec!["count", "likeCount", "likeRatio"]);

        let round = CatalogConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(round, config);
    }

    #[test]
    fn test_config_missing_metrics_field() {
        assert!(matches!(
            CatalogConfig::from_yaml("name: empty\n"),
            Err(ProfilerError::Yaml(_))
        ));
    }
}
