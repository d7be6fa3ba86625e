//! Typed settings values produced by the URL parsers.

use crate::error::ParseWarning;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// An ordered settings map, keyed by upper-case setting names.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A single settings value.
///
/// Serializes untagged, so a map of values renders the way a settings
/// dictionary would: `{"PORT": 5432, "OPTIONS": {"sslmode": "require"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Null / unset.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// String value.
    Str(String),
    /// List of values.
    List(Vec<ConfigValue>),
    /// Nested map.
    Map(ConfigMap),
}

impl ConfigValue {
    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a nested map, if it is one.
    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Check whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Map(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u16> for ConfigValue {
    fn from(i: u16) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(m: ConfigMap) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

/// A parse result together with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// The parsed value.
    pub value: T,
    /// Non-fatal problems, in the order they were found.
    pub warnings: Vec<ParseWarning>,
}

impl<T> Parsed<T> {
    /// Discard the warnings and return the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Check whether parsing raised any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Collects warnings for a single parse call and logs each one.
#[derive(Debug, Default)]
pub(crate) struct Warnings {
    items: Vec<ParseWarning>,
}

impl Warnings {
    pub(crate) fn push(&mut self, warning: ParseWarning) {
        warn!(warning = %warning, "URL parse warning");
        self.items.push(warning);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn finish<T>(self, value: T) -> Parsed<T> {
        Parsed {
            value,
            warnings: self.items,
        }
    }
}
