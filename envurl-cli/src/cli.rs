//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use envurl_config::Cast;
use std::path::PathBuf;

/// envurl - Database, cache and email URLs as framework settings
#[derive(Parser, Debug)]
#[command(name = "envurl")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "envurl - Database, cache and email URLs as framework settings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a database URL into a DATABASES entry
    Db(DbArgs),

    /// Parse a cache URL into a CACHES entry
    Cache(CacheArgs),

    /// Parse an email URL into email settings
    Email(EmailArgs),

    /// List the registered URL schemes
    Schemes(SchemesArgs),

    /// Display version information
    Version,
}

/// Output options shared by the parsing commands
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Print passwords instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

/// Supported output formats
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

// =============================================================================
// Db Command
// =============================================================================

/// Arguments for the `db` command
#[derive(Args, Debug)]
pub struct DbArgs {
    /// Database URL
    #[arg(env = "DATABASE_URL", hide_env_values = true)]
    pub url: String,

    /// Override the ENGINE derived from the scheme
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Force the type of an OPTIONS key (e.g. `ssl=bool`)
    #[arg(short, long = "cast", value_parser = parse_cast)]
    pub casts: Vec<(String, Cast)>,

    #[command(flatten)]
    pub output: OutputArgs,
}

// =============================================================================
// Cache Command
// =============================================================================

/// Arguments for the `cache` command
#[derive(Args, Debug)]
pub struct CacheArgs {
    /// Cache URL
    #[arg(env = "CACHE_URL", hide_env_values = true)]
    pub url: String,

    /// Override the BACKEND derived from the scheme
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Path to the settings file (defaults to envurl.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

// =============================================================================
// Email Command
// =============================================================================

/// Arguments for the `email` command
#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Email URL
    #[arg(env = "EMAIL_URL", hide_env_values = true)]
    pub url: String,

    /// Override the EMAIL_BACKEND derived from the scheme
    #[arg(short, long)]
    pub backend: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

// =============================================================================
// Schemes Command
// =============================================================================

/// Arguments for the `schemes` command
#[derive(Args, Debug)]
pub struct SchemesArgs {
    /// Path to the settings file used to resolve cache backends
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Parse a `key=cast` pair.
fn parse_cast(s: &str) -> Result<(String, Cast), String> {
    let (key, cast) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=CAST, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing option key in '{}'", s));
    }
    let cast = Cast::from_str(cast)
        .ok_or_else(|| format!("unknown cast '{}', expected bool, int or str", cast))?;
    Ok((key.to_string(), cast))
}
