//! `envurl cache` command - Parse a cache URL.

use envurl_config::CacheUrlParser;

use crate::cli::CacheArgs;
use crate::config::load_settings;
use crate::error::CliResult;
use crate::output;

/// Run the cache command
pub fn run(args: CacheArgs) -> CliResult<()> {
    let settings = load_settings(args.config.as_deref())?;

    let mut parser = CacheUrlParser::new().capabilities(settings.capabilities);
    if let Some(backend) = args.backend {
        parser = parser.backend(backend);
    }

    let parsed = parser.parse(&args.url)?;
    for warning in &parsed.warnings {
        output::warn(&warning.to_string());
    }

    super::print_config(parsed.value, args.output)
}
