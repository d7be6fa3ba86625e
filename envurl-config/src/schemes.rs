//! Scheme tables mapping URL schemes to framework backends.

use crate::settings::Capabilities;
use std::fmt;

/// PostgreSQL backend.
pub const POSTGRES_ENGINE: &str = "django.db.backends.postgresql";

/// SQLite backend.
pub const SQLITE_ENGINE: &str = "django.db.backends.sqlite3";

/// SMTP email backend.
pub const SMTP_BACKEND: &str = "django.core.mail.backends.smtp.EmailBackend";

/// Post-processing family of a database scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbFamily {
    /// PostgreSQL and derivatives; socket directories may sit in the path.
    Postgres,
    /// File or in-memory databases.
    Sqlite,
    /// LDAP directories; `NAME` is the server URI.
    Ldap,
    /// Oracle; a host without a path is a TNS name.
    Oracle,
    /// SQL Server over ODBC; expects a `driver` option.
    SqlServer,
    /// Plain `host:port/name` servers.
    Generic,
}

impl DbFamily {
    /// Get the family name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Ldap => "ldap",
            Self::Oracle => "oracle",
            Self::SqlServer => "sqlserver",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for DbFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A database scheme registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeEntry {
    /// URL scheme.
    pub scheme: &'static str,
    /// Backend identifier written to `ENGINE`.
    pub engine: &'static str,
    /// Post-processing family.
    pub family: DbFamily,
}

const fn entry(scheme: &'static str, engine: &'static str, family: DbFamily) -> SchemeEntry {
    SchemeEntry {
        scheme,
        engine,
        family,
    }
}

/// Registered database schemes.
pub static DB_SCHEMES: &[SchemeEntry] = &[
    entry("postgres", POSTGRES_ENGINE, DbFamily::Postgres),
    entry("postgresql", POSTGRES_ENGINE, DbFamily::Postgres),
    entry("psql", POSTGRES_ENGINE, DbFamily::Postgres),
    entry("pgsql", POSTGRES_ENGINE, DbFamily::Postgres),
    entry("postgis", "django.contrib.gis.db.backends.postgis", DbFamily::Postgres),
    entry("timescale", "timescale.db.backends.postgresql", DbFamily::Postgres),
    entry("timescalegis", "timescale.db.backends.postgis", DbFamily::Postgres),
    entry("redshift", "django_redshift_backend", DbFamily::Generic),
    entry("cockroachdb", "django_cockroachdb", DbFamily::Generic),
    entry("mysql", "django.db.backends.mysql", DbFamily::Generic),
    entry("mysql2", "django.db.backends.mysql", DbFamily::Generic),
    entry("mysql-connector", "mysql.connector.django", DbFamily::Generic),
    entry("mysqlgis", "django.contrib.gis.db.backends.mysql", DbFamily::Generic),
    entry("mssql", "mssql", DbFamily::SqlServer),
    entry("sqlserver", "mssql", DbFamily::SqlServer),
    entry("pyodbc", "sql_server.pyodbc", DbFamily::SqlServer),
    entry("oracle", "django.db.backends.oracle", DbFamily::Oracle),
    entry("sqlite", SQLITE_ENGINE, DbFamily::Sqlite),
    entry("spatialite", "django.contrib.gis.db.backends.spatialite", DbFamily::Sqlite),
    entry("ldap", "ldapdb.backends.ldap", DbFamily::Ldap),
    entry("prometheus-postgresql", "django_prometheus.db.backends.postgresql", DbFamily::Postgres),
    entry("prometheus-postgis", "django_prometheus.db.backends.postgis", DbFamily::Postgres),
    entry("prometheus-mysql", "django_prometheus.db.backends.mysql", DbFamily::Generic),
    entry("prometheus-sqlite", "django_prometheus.db.backends.sqlite3", DbFamily::Sqlite),
];

/// Look up a database scheme (case-sensitive).
///
/// ```rust
/// use envurl_config::schemes::{resolve_db, DbFamily};
///
/// let entry = resolve_db("postgis").unwrap();
/// assert_eq!(entry.engine, "django.contrib.gis.db.backends.postgis");
/// assert_eq!(entry.family, DbFamily::Postgres);
/// assert!(resolve_db("Postgres").is_none());
/// ```
pub fn resolve_db(scheme: &str) -> Option<&'static SchemeEntry> {
    DB_SCHEMES.iter().find(|e| e.scheme == scheme)
}

/// Registered cache schemes.
pub const CACHE_SCHEMES: &[&str] = &[
    "dbcache",
    "dummycache",
    "filecache",
    "locmemcache",
    "memcache",
    "pymemcache",
    "pylibmc",
    "rediscache",
    "redis",
    "rediss",
];

/// Look up the cache backend for a scheme.
///
/// The redis and pymemcache entries depend on the declared [`Capabilities`].
pub fn resolve_cache(scheme: &str, caps: &Capabilities) -> Option<&'static str> {
    let backend = match scheme {
        "dbcache" => "django.core.cache.backends.db.DatabaseCache",
        "dummycache" => "django.core.cache.backends.dummy.DummyCache",
        "filecache" => "django.core.cache.backends.filebased.FileBasedCache",
        "locmemcache" => "django.core.cache.backends.locmem.LocMemCache",
        "memcache" => "django.core.cache.backends.memcached.MemcachedCache",
        "pymemcache" => caps.pymemcache_backend(),
        "pylibmc" => "django.core.cache.backends.memcached.PyLibMCCache",
        "rediscache" | "redis" | "rediss" => caps.redis_backend(),
        _ => return None,
    };
    Some(backend)
}

/// Registered email schemes.
pub const EMAIL_SCHEMES: &[&str] = &[
    "smtp",
    "smtps",
    "smtp+tls",
    "smtp+ssl",
    "consolemail",
    "filemail",
    "memorymail",
    "dummymail",
];

/// Look up the email backend for a scheme.
pub fn resolve_email(scheme: &str) -> Option<&'static str> {
    let backend = match scheme {
        "smtp" | "smtps" | "smtp+tls" | "smtp+ssl" => SMTP_BACKEND,
        "consolemail" => "django.core.mail.backends.console.EmailBackend",
        "filemail" => "django.core.mail.backends.filebased.EmailBackend",
        "memorymail" => "django.core.mail.backends.locmem.EmailBackend",
        "dummymail" => "django.core.mail.backends.dummy.EmailBackend",
        _ => return None,
    };
    Some(backend)
}
