use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::constants;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub api: ApiConfig,

    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// SQLite URL for persisted search results.
    pub cache_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let cache_path = dirs::cache_dir().map_or_else(
            || "sqlite:data/barback.db".to_string(),
            |dir| format!("sqlite:{}", dir.join("barback").join("barback.db").display()),
        );

        Self {
            log_level: "warn".to_string(),
            cache_path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    /// Request timeout in seconds (default: 15)
    pub request_timeout_seconds: u64,

    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::api::DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: 15,
            user_agent: format!("Barback/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Persist search results between runs. When false an in-memory store is used.
    pub enabled: bool,

    /// Age after which a cached search is fetched again (default: 600 = 10 min)
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: constants::cache::SEARCH_TTL_SECONDS,
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("barback").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".barback").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Returns the path written, or `None` when a config already exists.
    pub fn create_default_if_missing() -> Result<Option<PathBuf>> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(None)
        } else {
            Self::default().save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(Some(path))
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("API base URL cannot be empty");
        }

        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;

        if self.api.request_timeout_seconds == 0 {
            anyhow::bail!("API request timeout must be > 0");
        }

        if self.cache.ttl_seconds == 0 {
            anyhow::bail!("Cache TTL must be > 0");
        }

        if self.cache.enabled && self.general.cache_path.trim().is_empty() {
            anyhow::bail!("Cache path cannot be empty when the cache is enabled");
        }

        Ok(())
    }
}
