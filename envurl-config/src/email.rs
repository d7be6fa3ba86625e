//! Email URL parsing.

use crate::env::{DEFAULT_EMAIL_ENV, EnvSource};
use crate::error::{ConfigError, ConfigResult};
use crate::options::{EMAIL_BASE_OPTIONS, KeyStyle, OptionsCast, apply_query};
use crate::raw::{RawUrl, unquote_plus};
use crate::schemes::resolve_email;
use crate::value::{ConfigMap, ConfigValue, Parsed, Warnings};
use tracing::debug;

/// Parser for email URLs.
///
/// ```rust
/// use envurl_config::{EmailUrlParser, ConfigValue};
///
/// let config = EmailUrlParser::new()
///     .parse("smtps://user@domain.com:password@smtp.example.com:587")
///     .unwrap()
///     .value;
/// assert_eq!(config["EMAIL_HOST_USER"], ConfigValue::from("user@domain.com"));
/// assert_eq!(config["EMAIL_PORT"], ConfigValue::Int(587));
/// assert_eq!(config["EMAIL_USE_TLS"], ConfigValue::Bool(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailUrlParser {
    backend: Option<String>,
}

impl EmailUrlParser {
    /// Create a parser with scheme-derived backends.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the `EMAIL_BACKEND` derived from the scheme.
    pub fn backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Parse an email URL.
    ///
    /// Without a backend override, an unregistered scheme is an
    /// [`ConfigError::InvalidEmailScheme`] error. Problems with the server
    /// or the options come back as warnings.
    pub fn parse(&self, url: &str) -> ConfigResult<Parsed<ConfigMap>> {
        debug!(url_len = url.len(), "EmailUrlParser::parse()");
        let raw = RawUrl::split(url);
        let scheme = raw.scheme().unwrap_or("");

        let backend = match self.backend {
            Some(ref backend) => backend.clone(),
            None => resolve_email(scheme)
                .ok_or_else(|| ConfigError::InvalidEmailScheme(scheme.to_string()))?
                .to_string(),
        };

        // Email URLs carry a single server.
        let mut warnings = Warnings::default();
        let server = raw.hosts(&mut warnings).into_iter().next();
        let path = raw.path().strip_prefix('/').unwrap_or(raw.path());

        let mut config = ConfigMap::new();
        config.insert("EMAIL_FILE_PATH".into(), unquote_plus(path).into());
        config.insert("EMAIL_HOST_USER".into(), raw.user().unwrap_or_default().into());
        config.insert("EMAIL_HOST_PASSWORD".into(), raw.password().unwrap_or_default().into());
        config.insert(
            "EMAIL_HOST".into(),
            server.as_ref().map(|s| s.bare_host().to_string()).into(),
        );
        config.insert("EMAIL_PORT".into(), server.and_then(|s| s.port).into());
        config.insert("EMAIL_BACKEND".into(), backend.into());

        match scheme {
            "smtps" | "smtp+tls" => {
                config.insert("EMAIL_USE_TLS".into(), ConfigValue::Bool(true));
            }
            "smtp+ssl" => {
                config.insert("EMAIL_USE_SSL".into(), ConfigValue::Bool(true));
            }
            _ => {}
        }

        if let Some(query) = raw.query() {
            let options = apply_query(
                &mut config,
                query,
                EMAIL_BASE_OPTIONS,
                KeyStyle::Upper,
                &OptionsCast::new(),
                &mut warnings,
            );
            config.insert("OPTIONS".into(), options.into());
        }

        debug!(scheme = %scheme, warnings = warnings.len(), "Email URL parsed");
        Ok(warnings.finish(config))
    }

    /// Parse the email URL held in an environment variable.
    pub fn from_env<E: EnvSource + ?Sized>(&self, env: &E, var: &str) -> ConfigResult<Parsed<ConfigMap>> {
        self.parse(&env.require(var)?)
    }

    /// Parse the email URL held in `EMAIL_URL`.
    pub fn from_email_url<E: EnvSource + ?Sized>(&self, env: &E) -> ConfigResult<Parsed<ConfigMap>> {
        self.from_env(env, DEFAULT_EMAIL_ENV)
    }
}

/// Parse an email URL with default settings.
pub fn email_url_config(url: &str) -> ConfigResult<Parsed<ConfigMap>> {
    EmailUrlParser::new().parse(url)
}
