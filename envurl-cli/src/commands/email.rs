//! `envurl email` command - Parse an email URL.

use envurl_config::EmailUrlParser;

use crate::cli::EmailArgs;
use crate::error::CliResult;
use crate::output;

/// Run the email command
pub fn run(args: EmailArgs) -> CliResult<()> {
    let mut parser = EmailUrlParser::new();
    if let Some(backend) = args.backend {
        parser = parser.backend(backend);
    }

    let parsed = parser.parse(&args.url)?;
    for warning in &parsed.warnings {
        output::warn(&warning.to_string());
    }

    super::print_config(parsed.value, args.output)
}
