//! Environment-driven configuration with warn-level logging for invalid values.

use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "TERMBLOG_DB";
pub const POOL_SIZE_ENV: &str = "TERMBLOG_DB_POOL_SIZE";

const DEFAULT_POOL_SIZE: u32 = 4;

/// Database file location.
///
/// `TERMBLOG_DB` overrides; otherwise the platform-local data directory.
pub fn db_path() -> PathBuf {
    match std::env::var(DB_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termblog")
            .join("blogs.db"),
    }
}

/// Connection pool size, from `TERMBLOG_DB_POOL_SIZE`.
pub fn db_pool_size() -> u32 {
    parse_with_default(POOL_SIZE_ENV, std::env::var(POOL_SIZE_ENV).ok(), DEFAULT_POOL_SIZE)
}

/// Parse a raw env var value with a default fallback.
///
/// An unset variable falls back silently (expected case); a set-but-unparseable
/// value logs a warning rather than being swallowed.
fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        }
    }
}
