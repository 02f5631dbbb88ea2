//! Environment configuration with warn-level logging for invalid values.

use std::fmt;
use std::time::Duration;

use crate::ConfigError;
use crate::constants::{DEFAULT_PORT, DEFAULT_REFRESH_INTERVAL_SECS};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + fmt::Display>(var: &str, default: T) -> T {
    parse_with_default(var, std::env::var(var).ok(), default)
}

fn parse_with_default<T: std::str::FromStr + fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Runtime configuration read from the environment.
#[derive(Clone)]
pub struct BotConfig {
    /// Bot API credential.
    pub token: Option<String>,
    /// Chat that receives error diagnostics.
    pub owner_id: Option<i64>,
    /// Base URL for webhook mode; `None` selects long-polling.
    pub webhook_url: Option<String>,
    /// Webhook listener port.
    pub port: u16,
    /// The host kills background work between requests, so refresh on demand.
    pub ephemeral_host: bool,
    /// Interval between background refreshes.
    pub refresh_interval: Duration,
    /// Secret token Telegram echoes on every webhook request.
    pub webhook_secret: Option<String>,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("owner_id", &self.owner_id)
            .field("webhook_url", &self.webhook_url)
            .field("port", &self.port)
            .field("ephemeral_host", &self.ephemeral_host)
            .field("refresh_interval", &self.refresh_interval)
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

impl BotConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let owner_id = get("OWNER_ID").and_then(|raw| match raw.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(value = %raw, "OWNER_ID is not an integer, error diagnostics disabled");
                None
            },
        });

        let refresh_secs = parse_with_default(
            "REFRESH_INTERVAL_SECS",
            get("REFRESH_INTERVAL_SECS"),
            DEFAULT_REFRESH_INTERVAL_SECS,
        );

        Self {
            token: get("TOKEN").map(|t| t.trim().to_owned()),
            owner_id,
            webhook_url: get("WEBHOOK_URL").map(|u| u.trim().to_owned()),
            port: parse_with_default("PORT", get("PORT"), DEFAULT_PORT),
            ephemeral_host: get("Vercel").is_some_and(|v| v == "1"),
            refresh_interval: Duration::from_secs(refresh_secs),
            webhook_secret: get("WEBHOOK_SECRET"),
        }
    }

    /// Returns the bot token or fails when none was configured.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.token.as_deref().ok_or(ConfigError::MissingToken)
    }
}
