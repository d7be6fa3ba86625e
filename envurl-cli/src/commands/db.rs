//! `envurl db` command - Parse a database URL.

use envurl_config::DbUrlParser;
use tracing::debug;

use crate::cli::DbArgs;
use crate::error::CliResult;
use crate::output;

/// Run the db command
pub fn run(args: DbArgs) -> CliResult<()> {
    let mut parser = DbUrlParser::new();
    if let Some(engine) = args.engine {
        parser = parser.engine(engine);
    }
    for (key, cast) in args.casts {
        debug!(key = %key, cast = %cast, "Option cast override");
        parser = parser.cast(key, cast);
    }

    let parsed = parser.parse(&args.url);
    for warning in &parsed.warnings {
        output::warn(&warning.to_string());
    }

    super::print_config(parsed.value, args.output)
}
