//! CLI configuration handling.

use std::path::{Path, PathBuf};

use envurl_config::Settings;
use envurl_config::settings::SETTINGS_FILE_NAME;

use crate::error::{CliError, CliResult};

/// Load parser settings.
///
/// An explicit path must exist. Without one, `envurl.toml` in the current
/// directory is used when present and defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> CliResult<Settings> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            Ok(Settings::from_file(path)?)
        }
        None => {
            let default_path = default_settings_path()?;
            if default_path.exists() {
                Ok(Settings::from_file(&default_path)?)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

/// `envurl.toml` in the current directory.
pub fn default_settings_path() -> CliResult<PathBuf> {
    Ok(std::env::current_dir()?.join(SETTINGS_FILE_NAME))
}
