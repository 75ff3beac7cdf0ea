//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::utils::url::SiteBase;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the site lives and where its content comes from
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Local preference storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration if the file exists, defaults otherwise.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if !self.site.fallback_url.is_empty() {
            let url = Url::parse(&self.site.fallback_url)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::validation(
                    "site.fallback_url must be an http(s) URL",
                ));
            }
        }
        if self.sources()?.is_empty() {
            return Err(AppError::validation("No content sources configured"));
        }
        Ok(())
    }

    /// Base path helper for this site.
    pub fn site_base(&self) -> SiteBase {
        SiteBase::new(&self.site.base_path)
    }

    /// Candidate content locations, primary first.
    ///
    /// The primary is the content path under the site base, resolved
    /// against the origin. Empty entries are dropped.
    pub fn sources(&self) -> Result<Vec<String>> {
        let mut sources = Vec::with_capacity(2);
        if !self.site.content_path.is_empty() {
            let relative = self.site_base().with_base(&self.site.content_path);
            let primary = if self.site.origin.is_empty() {
                relative
            } else {
                Url::parse(&self.site.origin)?.join(&relative)?.to_string()
            };
            sources.push(primary);
        }
        if !self.site.fallback_url.is_empty() {
            sources.push(self.site.fallback_url.clone());
        }
        Ok(sources)
    }

    /// Directory holding local preferences.
    pub fn storage_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.dir)
    }
}

/// Site location and content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin the site is served from
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Path prefix the site is deployed under
    #[serde(default = "defaults::base_path")]
    pub base_path: String,

    /// Content document path, relative to the base
    #[serde(default = "defaults::content_path")]
    pub content_path: String,

    /// Absolute URL tried when the primary location fails
    #[serde(default = "defaults::fallback_url")]
    pub fallback_url: String,

    /// Name shown in the brand button and hero
    #[serde(default = "defaults::owner")]
    pub owner: String,

    /// Hero tagline
    #[serde(default = "defaults::tagline")]
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: defaults::origin(),
            base_path: defaults::base_path(),
            content_path: defaults::content_path(),
            fallback_url: defaults::fallback_url(),
            owner: defaults::owner(),
            tagline: defaults::tagline(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "defaults::storage_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: defaults::storage_dir(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Site defaults
    pub fn origin() -> String {
        "http://localhost:4173".into()
    }
    pub fn base_path() -> String {
        "/".into()
    }
    pub fn content_path() -> String {
        "/myData.json".into()
    }
    pub fn fallback_url() -> String {
        "https://puhi8.github.io/me/myData.json".into()
    }
    pub fn owner() -> String {
        "Puhi8".into()
    }
    pub fn tagline() -> String {
        "Discovering as much as possible about computers while I'm still alive.".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; folio/0.1)".into()
    }

    // Storage defaults
    pub fn storage_dir() -> String {
        "storage".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}
