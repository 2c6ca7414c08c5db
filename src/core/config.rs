//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default timeout for a single insert against the datastore
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where lead records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Supabase PostgREST; requires `SUPABASE_URL` and `SUPABASE_ANON_KEY`
    #[default]
    Supabase,
    /// Process-local tables, lost on restart. Only with `LEADS_STORE=memory`.
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Supabase project URL
    /// Example: https://abcdefgh.supabase.co
    pub supabase_url: Option<String>,

    /// Supabase anon (public) API key, sent as `apikey` and bearer token
    pub supabase_anon_key: Option<String>,

    /// Timeout applied to every datastore request
    pub request_timeout: Duration,

    /// Selected by `LEADS_STORE`, Supabase unless set to `memory`
    pub store_backend: StoreBackend,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            supabase_url: non_empty_var("SUPABASE_URL"),
            supabase_anon_key: non_empty_var("SUPABASE_ANON_KEY"),
            request_timeout: Duration::from_secs(parse_timeout(
                std::env::var("LEADS_REQUEST_TIMEOUT_SECS").ok().as_deref(),
            )),
            store_backend: parse_backend(std::env::var("LEADS_STORE").ok().as_deref()),
        }
    }

    /// Both the Supabase URL and key are present
    pub fn has_supabase(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }

    /// The `(url, anon key)` pair, if fully configured
    pub fn supabase_credentials(&self) -> Option<(&str, &str)> {
        Some((
            self.supabase_url.as_deref()?,
            self.supabase_anon_key.as_deref()?,
        ))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

// The anon key is a credential; keep it out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field(
                "supabase_anon_key",
                &self.supabase_anon_key.as_ref().map(|_| "<redacted>"),
            )
            .field("request_timeout", &self.request_timeout)
            .field("store_backend", &self.store_backend)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn parse_backend(raw: Option<&str>) -> StoreBackend {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
        _ => StoreBackend::Supabase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    fn config(url: Option<&str>, key: Option<&str>) -> Config {
        Config {
            supabase_url: url.map(str::to_string),
            supabase_anon_key: key.map(str::to_string),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            store_backend: StoreBackend::Supabase,
        }
    }

    #[test]
    fn test_has_supabase_requires_both_values() {
        assert!(config(Some("https://x.supabase.co"), Some("anon")).has_supabase());
        assert!(!config(Some("https://x.supabase.co"), None).has_supabase());
        assert!(!config(None, Some("anon")).has_supabase());
        assert!(!config(None, None).has_supabase());
    }

    #[test]
    fn test_supabase_credentials() {
        let cfg = config(Some("https://x.supabase.co"), Some("anon"));
        assert_eq!(
            cfg.supabase_credentials(),
            Some(("https://x.supabase.co", "anon"))
        );
        assert!(config(None, Some("anon")).supabase_credentials().is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let cfg = config(Some("https://x.supabase.co"), Some("super-secret-anon-key"));
        let debug_str = format!("{:?}", cfg);

        assert!(debug_str.contains("https://x.supabase.co"));
        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("super-secret-anon-key"));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(None), DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("30")), 30);
        assert_eq!(parse_timeout(Some(" 5 ")), 5);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_parse_backend_memory_is_opt_in() {
        assert_eq!(parse_backend(None), StoreBackend::Supabase);
        assert_eq!(parse_backend(Some("")), StoreBackend::Supabase);
        assert_eq!(parse_backend(Some("supabase")), StoreBackend::Supabase);
        assert_eq!(parse_backend(Some("postgres")), StoreBackend::Supabase);
        assert_eq!(parse_backend(Some("memory")), StoreBackend::Memory);
        assert_eq!(parse_backend(Some(" Memory ")), StoreBackend::Memory);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only check what the
        // environment leaves untouched
        let config = Config::from_env();
        if std::env::var("LEADS_REQUEST_TIMEOUT_SECS").is_err() {
            assert_eq!(
                config.request_timeout,
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
            );
        }
        if std::env::var("LEADS_STORE").is_err() {
            assert_eq!(config.store_backend, StoreBackend::Supabase);
        }
        assert_eq!(
            config.has_supabase(),
            config.supabase_credentials().is_some()
        );
    }
}
