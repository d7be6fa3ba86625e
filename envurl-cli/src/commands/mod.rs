//! CLI command implementations.

pub mod cache;
pub mod db;
pub mod email;
pub mod schemes;
pub mod version;

use envurl_config::{ConfigMap, ConfigValue};

use crate::cli::{OutputArgs, OutputFormat};
use crate::error::CliResult;
use crate::output;

/// Replacement text for masked secrets.
pub const MASK: &str = "********";

/// Print a settings map to stdout in the requested format.
pub(crate) fn print_config(mut config: ConfigMap, args: OutputArgs) -> CliResult<()> {
    if !args.show_secrets {
        mask_secrets(&mut config);
    }
    output::raw(&render(&config, args.format)?);
    Ok(())
}

/// Serialize a settings map.
///
/// TOML has no null, so unset settings are left out of TOML output.
pub fn render(config: &ConfigMap, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Toml => Ok(toml::to_string(&without_nulls(config))?),
    }
}

/// Mask password settings and credentials embedded in locations.
pub fn mask_secrets(config: &mut ConfigMap) {
    for (key, value) in config.iter_mut() {
        if key.ends_with("PASSWORD") {
            if let ConfigValue::Str(password) = value {
                if !password.is_empty() {
                    *password = MASK.to_string();
                }
            }
        } else if key == "LOCATION" {
            match value {
                ConfigValue::Str(location) => *location = mask_url_password(location),
                ConfigValue::List(items) => {
                    for item in items.iter_mut() {
                        if let ConfigValue::Str(location) = item {
                            *location = mask_url_password(location);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn mask_url_password(location: &str) -> String {
    let Some((scheme, rest)) = location.split_once("://") else {
        return location.to_string();
    };
    let head_end = rest.find('/').unwrap_or(rest.len());
    let Some(at) = rest[..head_end].rfind('@') else {
        return location.to_string();
    };
    match rest[..at].split_once(':') {
        Some((user, password)) if !password.is_empty() => {
            format!("{}://{}:{}{}", scheme, user, MASK, &rest[at..])
        }
        _ => location.to_string(),
    }
}

fn without_nulls(config: &ConfigMap) -> ConfigMap {
    config
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                ConfigValue::Map(inner) => ConfigValue::Map(without_nulls(inner)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}
