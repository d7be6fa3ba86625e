//! `envurl schemes` command - List registered URL schemes.

use envurl_config::schemes::{CACHE_SCHEMES, DB_SCHEMES, EMAIL_SCHEMES, resolve_cache, resolve_email};

use crate::cli::SchemesArgs;
use crate::config::load_settings;
use crate::error::CliResult;
use crate::output::{self, list_item, section};

/// Run the schemes command
pub fn run(args: SchemesArgs) -> CliResult<()> {
    let settings = load_settings(args.config.as_deref())?;
    let caps = settings.capabilities;

    output::header("Registered Schemes");

    section("Database");
    for entry in DB_SCHEMES {
        list_item(&format!("{} → {} ({})", entry.scheme, entry.engine, entry.family));
    }
    output::newline();

    section("Cache");
    for scheme in CACHE_SCHEMES {
        if let Some(backend) = resolve_cache(scheme, &caps) {
            list_item(&format!("{} → {}", scheme, backend));
        }
    }
    output::newline();

    section("Email");
    for scheme in EMAIL_SCHEMES {
        if let Some(backend) = resolve_email(scheme) {
            list_item(&format!("{} → {}", scheme, backend));
        }
    }
    output::newline();

    output::dim(&format!("Framework version: {}", caps.framework_version));
    Ok(())
}
