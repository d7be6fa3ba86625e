//! Parser settings and backend capability flags.
//!
//! Some cache backends have several possible implementations depending on
//! which framework version and which third-party packages are deployed.
//! Rather than probing the host, the choice is declared up front, usually
//! in an `envurl.toml`:
//!
//! ```toml
//! [capabilities]
//! framework_version = "4.2"
//! django_redis = true
//! pymemcache = true
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Default settings file name.
pub const SETTINGS_FILE_NAME: &str = "envurl.toml";

/// A `MAJOR.MINOR` framework version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FrameworkVersion {
    /// Major version.
    pub major: u16,
    /// Minor version.
    pub minor: u16,
}

impl FrameworkVersion {
    /// Create a version.
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl Default for FrameworkVersion {
    fn default() -> Self {
        Self::new(4, 2)
    }
}

impl FromStr for FrameworkVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidVersion(s.to_string());
        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };
        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for FrameworkVersion {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FrameworkVersion> for String {
    fn from(v: FrameworkVersion) -> Self {
        v.to_string()
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Declared deployment capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Capabilities {
    /// Framework version the settings are generated for.
    pub framework_version: FrameworkVersion,
    /// The `django-redis` package is installed.
    pub django_redis: bool,
    /// The `pymemcache` package is installed.
    pub pymemcache: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            framework_version: FrameworkVersion::default(),
            django_redis: false,
            pymemcache: true,
        }
    }
}

impl Capabilities {
    /// Backend for `redis`, `rediss` and `rediscache` URLs.
    pub fn redis_backend(&self) -> &'static str {
        if self.django_redis {
            "django_redis.cache.RedisCache"
        } else if self.framework_version >= FrameworkVersion::new(4, 0) {
            "django.core.cache.backends.redis.RedisCache"
        } else {
            "redis_cache.RedisCache"
        }
    }

    /// Backend for `pymemcache` URLs.
    ///
    /// Falls back to the pylibmc backend on framework versions before 3.2
    /// or when pymemcache is not installed.
    pub fn pymemcache_backend(&self) -> &'static str {
        if self.framework_version < FrameworkVersion::new(3, 2) || !self.pymemcache {
            "django.core.cache.backends.memcached.PyLibMCCache"
        } else {
            "django.core.cache.backends.memcached.PyMemcacheCache"
        }
    }
}

/// Top-level parser settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Backend capability flags.
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl Settings {
    /// Load settings from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        debug!(path = %path.display(), "Loading settings");
        Self::from_str(&content)
    }

    /// Parse settings from a TOML string.
    pub fn from_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
