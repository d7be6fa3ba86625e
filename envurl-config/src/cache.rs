//! Cache URL parsing.

use crate::env::{DEFAULT_CACHE_ENV, EnvSource};
use crate::error::{ConfigError, ConfigResult};
use crate::options::{CACHE_BASE_OPTIONS, KeyStyle, OptionsCast, apply_query};
use crate::raw::RawUrl;
use crate::schemes::resolve_cache;
use crate::settings::Capabilities;
use crate::value::{ConfigMap, ConfigValue, Parsed, Warnings};
use tracing::debug;

/// Parser for cache URLs.
///
/// ```rust
/// use envurl_config::{CacheUrlParser, ConfigValue};
///
/// let config = CacheUrlParser::new().parse("redis://127.0.0.1:6379/1").unwrap().value;
/// assert_eq!(
///     config["BACKEND"],
///     ConfigValue::from("django.core.cache.backends.redis.RedisCache")
/// );
/// assert_eq!(config["LOCATION"], ConfigValue::from("redis://127.0.0.1:6379/1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheUrlParser {
    backend: Option<String>,
    capabilities: Capabilities,
}

impl CacheUrlParser {
    /// Create a parser with default capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the `BACKEND` derived from the scheme.
    pub fn backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Select backends according to declared capabilities.
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Parse a cache URL.
    ///
    /// An empty URL yields an empty map. An unregistered scheme is an
    /// [`ConfigError::InvalidCacheScheme`] error. Invalid ports and options
    /// come back as warnings.
    pub fn parse(&self, url: &str) -> ConfigResult<Parsed<ConfigMap>> {
        let mut warnings = Warnings::default();
        if url.is_empty() {
            return Ok(warnings.finish(ConfigMap::new()));
        }
        debug!(url_len = url.len(), "CacheUrlParser::parse()");

        let raw = RawUrl::split(url);
        let scheme = raw.scheme().unwrap_or("");
        let backend = resolve_cache(scheme, &self.capabilities)
            .ok_or_else(|| ConfigError::InvalidCacheScheme(scheme.to_string()))?;

        let authority = raw.authority();
        let path = raw.path();

        // File caches hold a directory, everything else names servers.
        if scheme != "filecache" {
            raw.hosts(&mut warnings);
        }

        let location = if scheme == "filecache" {
            ConfigValue::from(format!("{}{}", authority, path))
        } else if authority.is_empty() && matches!(scheme, "memcache" | "pymemcache") {
            ConfigValue::from(format!("unix:{}", path))
        } else if scheme.starts_with("redis") {
            let prefix = if raw.host_segment().is_empty() {
                "unix"
            } else {
                scheme.trim_end_matches("cache")
            };
            locations(authority, |loc| format!("{}://{}{}", prefix, loc, path))
        } else {
            locations(authority, |loc| loc.to_string())
        };

        let mut config = ConfigMap::new();
        config.insert("BACKEND".into(), backend.into());
        config.insert("LOCATION".into(), location);

        if let Some(query) = raw.query() {
            let options = apply_query(
                &mut config,
                query,
                CACHE_BASE_OPTIONS,
                KeyStyle::Upper,
                &OptionsCast::new(),
                &mut warnings,
            );
            config.insert("OPTIONS".into(), options.into());
        }

        if let Some(ref backend) = self.backend {
            config.insert("BACKEND".into(), backend.as_str().into());
        }

        debug!(scheme = %scheme, warnings = warnings.len(), "Cache URL parsed");
        Ok(warnings.finish(config))
    }

    /// Parse the cache URL held in an environment variable.
    pub fn from_env<E: EnvSource + ?Sized>(&self, env: &E, var: &str) -> ConfigResult<Parsed<ConfigMap>> {
        self.parse(&env.require(var)?)
    }

    /// Parse the cache URL held in `CACHE_URL`.
    pub fn from_cache_url<E: EnvSource + ?Sized>(&self, env: &E) -> ConfigResult<Parsed<ConfigMap>> {
        self.from_env(env, DEFAULT_CACHE_ENV)
    }
}

/// Parse a cache URL with default capabilities.
pub fn cache_url_config(url: &str) -> ConfigResult<Parsed<ConfigMap>> {
    CacheUrlParser::new().parse(url)
}

/// One location per comma-separated authority entry; a single entry is a
/// plain string.
fn locations(authority: &str, render: impl Fn(&str) -> String) -> ConfigValue {
    let mut items: Vec<ConfigValue> = authority
        .split(',')
        .map(|loc| ConfigValue::from(render(loc)))
        .collect();
    if items.len() == 1 {
        items.remove(0)
    } else {
        ConfigValue::List(items)
    }
}
