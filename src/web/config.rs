use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::aoi::DEFAULT_COST_PER_SQ_KM_USD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub aoi: AoiConfig,
    pub api_keys: Vec<ApiKey>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AoiConfig {
    #[serde(default = "default_cost_per_sq_km")]
    pub cost_per_sq_km_usd: f64,
}

impl Default for AoiConfig {
    fn default() -> Self {
        Self {
            cost_per_sq_km_usd: default_cost_per_sq_km(),
        }
    }
}

fn default_cost_per_sq_km() -> f64 {
    DEFAULT_COST_PER_SQ_KM_USD
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiKey {
    pub key: String,
    pub name: String,
    pub permissions: HashSet<Permission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    EstimateFeasibility,
    ListSensors,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn find_api_key(&self, key: &str) -> Option<&ApiKey> {
        self.api_keys.iter().find(|k| k.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml("api_keys: []").unwrap();
        assert_eq!("0.0.0.0:8080", config.web.bind);
        assert_eq!(15.0, config.aoi.cost_per_sq_km_usd);
        assert!(config.api_keys.is_empty());
    }

    #[test]
    fn test_full() {
        let yaml = r#"
web:
  bind: 127.0.0.1:9000
aoi:
  cost_per_sq_km_usd: 22.5
api_keys:
  - key: secret
    name: field-team
    permissions: [estimate_feasibility, list_sensors]
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!("127.0.0.1:9000", config.web.bind);
        assert_eq!(22.5, config.aoi.cost_per_sq_km_usd);

        let key = config.find_api_key("secret").unwrap();
        assert_eq!("field-team", key.name);
        assert!(key.permissions.contains(&Permission::ListSensors));
        assert!(config.find_api_key("nope").is_none());
    }

    #[test]
    fn test_unknown_permission_rejected() {
        let yaml = "api_keys:\n  - key: k\n    name: n\n    permissions: [approve_schedule]\n";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }
}
