//! Webhook registration and the update receiving handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use botapi_docs_client::{BotApiError, BotClient};
use botapi_docs_core::telegram::{SetWebhook, Update};
use botapi_docs_core::{ALLOWED_UPDATES, WEBHOOK_MAX_CONNECTIONS, WEBHOOK_SECRET_HEADER};

use crate::AppState;
use crate::api_error::ApiError;

/// Registers `{webhook_url}{token}` with the Bot API.
pub async fn configure_webhook(
    client: &BotClient,
    webhook_url: &str,
    secret_token: &str,
) -> Result<(), BotApiError> {
    let params = SetWebhook {
        url: format!("{webhook_url}{}", client.token()),
        max_connections: WEBHOOK_MAX_CONNECTIONS,
        drop_pending_updates: true,
        allowed_updates: ALLOWED_UPDATES.iter().map(|s| (*s).to_owned()).collect(),
        secret_token: Some(secret_token.to_owned()),
    };
    if !client.set_webhook(&params).await? {
        return Err(BotApiError::Api { code: 0, description: "setWebhook returned false".to_owned() });
    }
    tracing::info!(url = %webhook_url, "webhook registered");
    Ok(())
}

/// Receives one update and hands it to the dispatcher on its own task.
///
/// Anything that is not ours to handle is acknowledged so the Bot API does
/// not redeliver it; only a bad secret is rejected.
pub async fn receive_update(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if token != state.bot_token {
        tracing::warn!("webhook call for unknown bot token ignored");
        return Ok(StatusCode::OK);
    }

    let secret = headers.get(WEBHOOK_SECRET_HEADER).and_then(|v| v.to_str().ok());
    if secret != Some(state.secret_token.as_str()) {
        return Err(ApiError::Unauthorized("invalid secret token".to_owned()));
    }

    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => {
            tracing::debug!(update_id = update.update_id, "update received");
            state.dispatcher.spawn(update);
        },
        Err(e) => {
            tracing::warn!(error = %e, bytes = body.len(), "failed to decode webhook update");
        },
    }
    Ok(StatusCode::OK)
}
