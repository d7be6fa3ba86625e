//! Environment variable sources.

use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;

/// Default variable holding the database URL.
pub const DEFAULT_DATABASE_ENV: &str = "DATABASE_URL";

/// Default variable holding the cache URL.
pub const DEFAULT_CACHE_ENV: &str = "CACHE_URL";

/// Default variable holding the email URL.
pub const DEFAULT_EMAIL_ENV: &str = "EMAIL_URL";

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Get a variable, failing when it is not set.
    fn require(&self, name: &str) -> ConfigResult<String> {
        self.get(name)
            .ok_or_else(|| ConfigError::EnvNotFound(name.to_string()))
    }
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
