//! CLI error types and result alias.

use envurl_config::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(envurl::io))]
    Io(#[from] std::io::Error),

    /// Settings file error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(envurl::config))]
    Config(String),

    /// URL could not be turned into settings
    #[error("{0}")]
    #[diagnostic(code(envurl::parse))]
    Parse(String),

    /// Output serialization error
    #[error("Format error: {0}")]
    #[diagnostic(code(envurl::format))]
    Format(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidEmailScheme(_)
            | ConfigError::InvalidCacheScheme(_)
            | ConfigError::EnvNotFound(_) => CliError::Parse(err.to_string()),
            ConfigError::Io { .. } | ConfigError::Settings(_) | ConfigError::InvalidVersion(_) => {
                CliError::Config(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(format!("Failed to serialize JSON: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Format(format!("Failed to serialize TOML: {}", err))
    }
}
