//! Configuration module for SV Tracker.
//!
//! Settings come from environment variables (optionally via a `.env` file
//! loaded by the binary). Every value has a default, so an empty environment
//! yields a working tracker.

use crate::domain::category::Roster;
use crate::infrastructure::record_store::ParsePolicy;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "results_by_day";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one `<date>.txt` per day.
    pub data_dir: PathBuf,
    /// Always the built-in class list; not read from the environment.
    pub categories: Roster,
    pub parse_policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            categories: Roster::default(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = lookup("TRACKER_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let strict = match lookup("TRACKER_STRICT_PARSING") {
            Some(v) => v
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Invalid TRACKER_STRICT_PARSING: {}", v))?,
            None => false,
        };

        Ok(Self {
            data_dir,
            categories: Roster::default(),
            parse_policy: if strict {
                ParsePolicy::Strict
            } else {
                ParsePolicy::Lenient
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("results_by_day"));
        assert_eq!(config.categories, Roster::default());
        assert_eq!(config.parse_policy, ParsePolicy::Lenient);
    }

    #[test]
    fn test_config_overrides() {
        let config = config_from(&[
            ("TRACKER_DATA_DIR", "/tmp/sv"),
            ("TRACKER_STRICT_PARSING", "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/sv"));
        assert_eq!(config.parse_policy, ParsePolicy::Strict);
    }

    #[test]
    fn test_category_list_is_not_configurable() {
        // A shorter list would drop the other classes' lines on the next save
        let config = config_from(&[("TRACKER_CATEGORIES", "Abysscraft")]).unwrap();
        assert_eq!(config.categories, Roster::default());
        assert_eq!(config.categories.len(), 8);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(config_from(&[("TRACKER_STRICT_PARSING", "maybe")]).is_err());
    }
}
