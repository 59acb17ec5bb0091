//! Environment variable helpers
//!
//! Runtime knobs (log level, stderr flushing, demo sizes) are read from the
//! environment with a typed default, so a missing or malformed variable never
//! turns into an error.
//!
//! ```ignore
//! use gvdelegate::env::{env_get, env_get_bool};
//!
//! let iterations: u64 = env_get("GVD_ITERATIONS", 1_000_000);
//! let verbose = env_get_bool("GVD_VERBOSE", false);
//! ```

use std::str::FromStr;

/// Parse `key` as `T`, falling back to `default` when unset or unparsable
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Parse `key` as `T`, or `None` when unset or unparsable
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read `key` as a flag
///
/// "1", "true", "yes" and "on" (any case) are true, any other value is false.
/// An unset variable yields `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => is_truthy(&val),
        Err(_) => default,
    }
}

pub(crate) fn is_truthy(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// ============================================================================
// Tests
// ============================================================================
