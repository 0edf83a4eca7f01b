use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The classic league this dashboard reports on.
pub const DEFAULT_LEAGUE_ID: u32 = 5669;

/// Connection settings for reaching the FPL API (directly or through a relay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every route is appended to, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub retry: RetryPolicy,
}

/// How often and how patiently a failed request is repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubles on every following retry.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://fantasy.premierleague.com/api".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `FPL_DEBRIEF_*` environment variables when set and valid.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("FPL_DEBRIEF_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = env_parse("FPL_DEBRIEF_TIMEOUT_SECS") {
            config.timeout_secs = timeout;
        }
        if let Some(attempts) = env_parse("FPL_DEBRIEF_MAX_ATTEMPTS") {
            config.retry.max_attempts = attempts;
        }
        if let Some(delay) = env_parse("FPL_DEBRIEF_RETRY_DELAY_MS") {
            config.retry.base_delay_ms = delay;
        }

        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RetryPolicy {
    /// A policy that tries exactly once.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: 0,
        }
    }

    /// Backoff before retry number `retry` (1-based): base, 2×base, 4×base, …
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u64.saturating_pow(retry.saturating_sub(1));
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(key, value = %raw, "ignoring unparsable environment override");
    }
    parsed
}
