use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;
pub const DEFAULT_USER_AGENT: &str = "remitlens/0.1";

/// Connection settings for the remote comparison service.
///
/// Environment variables:
/// - `REMITLENS_API_URL` (default `http://localhost:8000`)
/// - `REMITLENS_TIMEOUT_SECS` (default 90)
/// - `REMITLENS_USER_AGENT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("REMITLENS_API_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.base_url);

        let timeout = match lookup("REMITLENS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid REMITLENS_TIMEOUT_SECS");
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let user_agent = lookup("REMITLENS_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            base_url,
            timeout,
            user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `base_url` joined with `path`, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
