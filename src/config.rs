use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::RelationCache;
use crate::error::FamtreeError;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub famtree: FamtreeConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Data sources and logging
#[derive(Debug, Clone, Deserialize)]
pub struct FamtreeConfig {
    /// JSON export of the member collection.
    #[serde(default = "default_members_path")]
    pub members_path: PathBuf,
    /// JSON export of the relation rule collection. Without it every
    /// translated label is empty.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FamtreeConfig {
    fn default() -> Self {
        Self {
            members_path: default_members_path(),
            rules_path: None,
            log_level: default_log_level(),
        }
    }
}

/// Relation cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_members_path() -> PathBuf {
    PathBuf::from("members.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    1000
}

fn default_cache_ttl_secs() -> u64 {
    60
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in FAMTREE_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        let config_path = Self::config_path();
        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::from_toml(&config_str)
            .with_context(|| format!("Invalid config file: {}", config_path.display()))
    }

    /// Like [`Config::load`], but a missing config file yields the defaults.
    pub fn load_or_default() -> Result<Self> {
        let _ = dotenv::dotenv();

        let config_path = Self::config_path();
        if !config_path.exists() {
            log::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load()
    }

    /// Parse and validate configuration text
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn config_path() -> PathBuf {
        std::env::var("FAMTREE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    }

    /// Validate configuration values
    fn validate(&self) -> std::result::Result<(), FamtreeError> {
        if self.cache.enabled {
            if self.cache.capacity == 0 {
                return Err(FamtreeError::Config(
                    "cache.capacity must be greater than 0".to_string(),
                ));
            }
            if self.cache.ttl_secs == 0 {
                return Err(FamtreeError::Config(
                    "cache.ttl_secs must be greater than 0".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn members_path(&self) -> &Path {
        &self.famtree.members_path
    }

    pub fn rules_path(&self) -> Option<&Path> {
        self.famtree.rules_path.as_deref()
    }

    /// Build the relation cache described by `[cache]`, if enabled.
    pub fn relation_cache(&self) -> Option<RelationCache> {
        self.cache.enabled.then(|| {
            RelationCache::new(
                self.cache.capacity,
                Duration::from_secs(self.cache.ttl_secs),
            )
        })
    }
}
