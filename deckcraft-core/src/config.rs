//! Configuration system for verification checks and edit overrides

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Main checker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    /// Extra literal replacements applied after the built-in plan
    #[serde(default)]
    pub replacements: Vec<ReplacementRule>,
}

impl CheckerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CheckerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check if a check is enabled globally
    pub fn is_check_enabled(&self, check_id: &str) -> bool {
        if self
            .global
            .disabled_checks
            .iter()
            .any(|selector| matches_check_selector(selector, check_id))
        {
            return false;
        }

        // Nothing explicitly enabled means everything runs
        if self.global.enabled_checks.is_empty() {
            return true;
        }

        self.global
            .enabled_checks
            .iter()
            .any(|selector| matches_check_selector(selector, check_id))
    }

    /// Validate the configuration against a set of valid tokens
    pub fn validate_checks(&self, valid_tokens: &HashSet<String>) -> Result<()> {
        for check in &self.global.disabled_checks {
            if check == "ALL" {
                anyhow::bail!("Configuration error: 'ALL' is not allowed in disabled_checks");
            }
            if !valid_tokens.contains(check) {
                anyhow::bail!(
                    "Configuration error: Unknown check or category '{}' in disabled_checks",
                    check
                );
            }
        }

        for check in &self.global.enabled_checks {
            if !valid_tokens.contains(check) {
                anyhow::bail!(
                    "Configuration error: Unknown check or category '{}' in enabled_checks",
                    check
                );
            }
        }

        Ok(())
    }

    /// Get an integer parameter from the global section
    pub fn get_param_int(&self, key: &str) -> Option<i64> {
        self.global.params.get(key).and_then(|v| v.as_integer())
    }

    /// Get a string parameter from the global section
    pub fn get_param_str(&self, key: &str) -> Option<&str> {
        self.global.params.get(key).and_then(|v| v.as_str())
    }

    /// Get a boolean parameter from the global section
    pub fn get_param_bool(&self, key: &str) -> Option<bool> {
        self.global.params.get(key).and_then(|v| v.as_bool())
    }
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// List of enabled checks (empty means all enabled)
    #[serde(default)]
    pub enabled_checks: HashSet<String>,
    /// List of disabled checks
    #[serde(default)]
    pub disabled_checks: HashSet<String>,
    #[serde(flatten)]
    pub params: HashMap<String, toml::Value>,
}

/// One literal replacement from the configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub from: String,
    pub to: String,
}

fn matches_check_selector(selector: &str, check_id: &str) -> bool {
    if selector == "ALL" {
        return true;
    }
    check_id == selector || check_id.starts_with(selector)
}
