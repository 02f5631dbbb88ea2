use std::fmt;
use std::time::Duration;

use botapi_docs_core::telegram::{
    AnswerInlineQuery, ApiResponse, GetUpdates, Message, SendMessage, SetWebhook, Update, User,
};
use botapi_docs_core::{BOT_API_BASE_URL, LONG_POLL_TIMEOUT_SECS};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::BotApiError;

/// Must outlast the server-side long-poll timeout of `getUpdates`.
const REQUEST_TIMEOUT_SECS: u64 = LONG_POLL_TIMEOUT_SECS + 30;

/// Client for the Telegram Bot API.
#[derive(Clone)]
pub struct BotClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl fmt::Debug for BotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotClient")
            .field("client", &self.client)
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BotClient {
    /// Creates a client for the public Bot API endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(token: String) -> Result<Self, BotApiError> {
        Self::with_base_url(token, BOT_API_BASE_URL.to_owned())
    }

    /// Creates a client for a self-hosted Bot API server or a test double.
    pub fn with_base_url(token: String, base_url: String) -> Result<Self, BotApiError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BotApiError::ClientInit(e.to_string()))?;
        Ok(Self { client, token, base_url })
    }

    /// The token this client authenticates with.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    pub async fn get_me(&self) -> Result<User, BotApiError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    pub async fn get_updates(&self, params: &GetUpdates) -> Result<Vec<Update>, BotApiError> {
        self.call("getUpdates", params).await
    }

    pub async fn set_webhook(&self, params: &SetWebhook) -> Result<bool, BotApiError> {
        self.call("setWebhook", params).await
    }

    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool, BotApiError> {
        self.call(
            "deleteWebhook",
            &serde_json::json!({ "drop_pending_updates": drop_pending_updates }),
        )
        .await
    }

    pub async fn answer_inline_query(
        &self,
        params: &AnswerInlineQuery,
    ) -> Result<bool, BotApiError> {
        self.call("answerInlineQuery", params).await
    }

    pub async fn send_message(&self, params: &SendMessage) -> Result<Message, BotApiError> {
        self.call("sendMessage", params).await
    }

    /// Posts `params` as JSON to `method` and unwraps the response envelope.
    async fn call<P, R>(&self, method: &str, params: &P) -> Result<R, BotApiError>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/bot{}/{method}", self.base_url, self.token))
            .json(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse<R> =
            serde_json::from_str(&body).map_err(|e| BotApiError::JsonParse {
                context: format!("{method} response (HTTP {status}, body: {})", truncate(&body, 200)),
                source: e,
            })?;

        if !envelope.ok {
            return Err(BotApiError::Api {
                code: envelope.error_code.unwrap_or_else(|| i64::from(status.as_u16())),
                description: envelope.description.unwrap_or_default(),
            });
        }

        envelope.result.ok_or_else(|| BotApiError::Api {
            code: i64::from(status.as_u16()),
            description: format!("{method} returned ok without a result"),
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
