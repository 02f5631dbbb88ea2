//! Shared constants for botapi-docs.

/// Machine-readable Bot API specification consumed by the fetcher.
pub const SPEC_URL: &str =
    "https://github.com/PaulSonOfLars/telegram-bot-api-spec/raw/main/api.json";

/// Total deadline for one specification fetch (connect, headers and body).
pub const SPEC_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default interval between background refreshes.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3600;

/// Telegram's maximum message length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Telegram accepts at most 50 results per inline query answer.
pub const MAX_INLINE_RESULTS: usize = 50;

/// Cache time for the empty-query placeholder answer.
pub const EMPTY_QUERY_CACHE_SECS: u32 = 5;

/// Cache time for the "no results" answer.
pub const NO_RESULTS_CACHE_SECS: u32 = 500;

/// Leading token users may type before the actual query.
pub const QUERY_PREFIX: &str = "botapi";

/// Base URL of the Telegram Bot API.
pub const BOT_API_BASE_URL: &str = "https://api.telegram.org";

/// Update kinds the bot subscribes to.
pub const ALLOWED_UPDATES: [&str; 2] = ["message", "inline_query"];

/// Maximum simultaneous webhook connections requested from Telegram.
pub const WEBHOOK_MAX_CONNECTIONS: u32 = 40;

/// Header carrying the webhook secret token.
pub const WEBHOOK_SECRET_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Default webhook listener port.
pub const DEFAULT_PORT: u16 = 8080;

/// Server-side long-poll timeout for `getUpdates`.
pub const LONG_POLL_TIMEOUT_SECS: u64 = 30;
