//! Query-string options and value coercion.

use crate::error::ParseWarning;
use crate::value::{ConfigMap, ConfigValue, Warnings};
use std::collections::HashMap;
use std::fmt;
use url::form_urlencoded;

/// Strings accepted as `true` by [`Cast::Bool`].
pub const TRUE_STRINGS: &[&str] = &["true", "on", "ok", "y", "yes", "1"];

/// Database options promoted to top-level settings.
pub const DB_BASE_OPTIONS: &[&str] = &[
    "CONN_MAX_AGE",
    "ATOMIC_REQUESTS",
    "AUTOCOMMIT",
    "CONN_HEALTH_CHECKS",
    "DISABLE_SERVER_SIDE_CURSORS",
];

/// Cache options promoted to top-level settings.
pub const CACHE_BASE_OPTIONS: &[&str] = &["TIMEOUT", "KEY_PREFIX", "VERSION", "KEY_FUNCTION", "BINARY"];

/// Email options promoted to top-level settings.
pub const EMAIL_BASE_OPTIONS: &[&str] = &["EMAIL_USE_TLS", "EMAIL_USE_SSL"];

/// Explicit target type for a query option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cast {
    /// Infer the type from the value (see [`infer`]).
    #[default]
    Infer,
    /// Boolean; true for any of [`TRUE_STRINGS`], case-insensitive.
    Bool,
    /// Integer; values that do not parse keep their string form.
    Int,
    /// Keep the value verbatim.
    Str,
}

impl Cast {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "infer" | "auto" => Some(Self::Infer),
            "bool" | "boolean" => Some(Self::Bool),
            "int" | "integer" => Some(Self::Int),
            "str" | "string" => Some(Self::Str),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infer => "infer",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Str => "str",
        }
    }

    pub(crate) fn apply(self, key: &str, value: &str, warnings: &mut Warnings) -> ConfigValue {
        match self {
            Self::Infer => infer(value),
            Self::Bool => ConfigValue::Bool(TRUE_STRINGS.contains(&value.to_lowercase().as_str())),
            Self::Str => ConfigValue::Str(value.to_string()),
            Self::Int => match value.trim().parse::<i64>() {
                Ok(i) => ConfigValue::Int(i),
                Err(_) => {
                    warnings.push(ParseWarning::InvalidOptionCast {
                        key: key.to_string(),
                        value: value.to_string(),
                        cast: self.as_str(),
                    });
                    ConfigValue::Str(value.to_string())
                }
            },
        }
    }
}

impl fmt::Display for Cast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-key cast overrides.
pub type OptionsCast = HashMap<String, Cast>;

/// Infer a typed value from a query-string value.
///
/// Order: boolean literals, null literals, unsigned integers, then string.
///
/// ```rust
/// use envurl_config::{infer, ConfigValue};
///
/// assert_eq!(infer("True"), ConfigValue::Bool(true));
/// assert_eq!(infer("None"), ConfigValue::Null);
/// assert_eq!(infer("600"), ConfigValue::Int(600));
/// assert_eq!(infer("SET storage_engine=INNODB"), ConfigValue::from("SET storage_engine=INNODB"));
/// ```
pub fn infer(value: &str) -> ConfigValue {
    match value.to_lowercase().as_str() {
        "true" => return ConfigValue::Bool(true),
        "false" => return ConfigValue::Bool(false),
        "none" | "null" => return ConfigValue::Null,
        _ => {}
    }
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(i) = value.parse::<i64>() {
            return ConfigValue::Int(i);
        }
    }
    ConfigValue::Str(value.to_string())
}

/// Decode a query string into key/value pairs.
///
/// `+` and percent escapes are decoded, blank values are dropped and the
/// first occurrence of a repeated key wins.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() || pairs.iter().any(|(k, _)| *k == key) {
            continue;
        }
        pairs.push((key.into_owned(), value.into_owned()));
    }
    pairs
}

/// How option keys are stored under `OPTIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyStyle {
    /// Keep the key as written.
    Verbatim,
    /// Upper-case the key.
    Upper,
}

/// Split query options into promoted top-level settings and nested `OPTIONS`.
pub(crate) fn apply_query(
    config: &mut ConfigMap,
    query: &str,
    promoted: &[&str],
    style: KeyStyle,
    casts: &OptionsCast,
    warnings: &mut Warnings,
) -> ConfigMap {
    let mut options = ConfigMap::new();
    for (key, value) in query_pairs(query) {
        let upper = key.to_uppercase();
        if promoted.contains(&upper.as_str()) {
            config.insert(upper, infer(&value));
            continue;
        }
        let cast = casts.get(&key).copied().unwrap_or_default();
        let stored = match style {
            KeyStyle::Verbatim => key.clone(),
            KeyStyle::Upper => upper,
        };
        options.insert(stored, cast.apply(&key, &value, warnings));
    }
    options
}
