use crate::error::{CragError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub audit: AuditConfig,
    pub filter: FilterConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Unified values above this are flagged as suspicious. The stock tables
    /// top out at 27 (Fontainebleau 8C+).
    pub suspicious_ceiling: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            suspicious_ceiling: 27.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Read grade-range bounds as bouldering grades even when the active
    /// type filter does not name a bouldering discipline.
    pub bouldering_context: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_content = fs::read_to_string(CONFIG_PATH).map_err(|e| {
            CragError::Config(format!(
                "Failed to read config file '{}': {}",
                CONFIG_PATH, e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Load `config.toml` if present, falling back to defaults when it is
    /// missing. A malformed file is reported and replaced with defaults so
    /// the CLI stays usable.
    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            return Config::default();
        }
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed {}: {}", CONFIG_PATH, e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_table_ceiling() {
        let config = Config::default();
        assert_eq!(config.audit.suspicious_ceiling, 27.0);
        assert!(!config.filter.bouldering_context);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[filter]\nbouldering_context = true\n").unwrap();
        assert!(config.filter.bouldering_context);
        assert_eq!(config.audit.suspicious_ceiling, 27.0);
    }
}
