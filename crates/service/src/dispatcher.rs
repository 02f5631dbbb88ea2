//! Routes incoming updates to their handlers.

use std::sync::Arc;

use botapi_docs_core::telegram::{Message, SendMessage, Update};
use tokio::task::JoinHandle;

use crate::{BotTransport, InlineQueryService, ServiceError};

/// Dispatches one update at a time; shared between webhook and polling.
pub struct Dispatcher {
    inline: InlineQueryService,
    transport: Arc<dyn BotTransport>,
    owner_id: Option<i64>,
    bot_username: String,
}

impl Dispatcher {
    #[must_use]
    pub fn new(
        inline: InlineQueryService,
        transport: Arc<dyn BotTransport>,
        owner_id: Option<i64>,
        bot_username: impl Into<String>,
    ) -> Self {
        Self { inline, transport, owner_id, bot_username: bot_username.into() }
    }

    #[must_use]
    pub fn inline(&self) -> &InlineQueryService {
        &self.inline
    }

    #[must_use]
    pub fn bot_username(&self) -> &str {
        &self.bot_username
    }

    /// Handles `update` on its own task.
    pub fn spawn(self: &Arc<Self>, update: Update) -> JoinHandle<()> {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move { dispatcher.dispatch(update).await })
    }

    /// Handles `update`, reporting any failure instead of returning it.
    pub async fn dispatch(&self, update: Update) {
        let update_id = update.update_id;
        if let Err(e) = self.route(update).await {
            tracing::error!(update_id, error = %e, transient = e.is_transient(), "failed to handle update");
            self.report_to_owner(&e).await;
        }
    }

    async fn route(&self, update: Update) -> Result<(), ServiceError> {
        if let Some(inline_query) = update.inline_query {
            return self.inline.handle_inline_query(self.transport.as_ref(), &inline_query).await;
        }
        if let Some(message) = update.message {
            return self.handle_message(&message).await;
        }
        tracing::debug!(update_id = update.update_id, "ignoring unsupported update");
        Ok(())
    }

    async fn handle_message(&self, message: &Message) -> Result<(), ServiceError> {
        let Some(text) = message.text.as_deref() else {
            return Ok(());
        };
        if !is_start_command(text, &self.bot_username) {
            return Ok(());
        }
        let reply = SendMessage::text(message.chat.id, start_text(&self.bot_username))
            .html()
            .reply_to(message.message_id);
        self.transport.send_message(&reply).await?;
        Ok(())
    }

    async fn report_to_owner(&self, error: &ServiceError) {
        let Some(owner_id) = self.owner_id else {
            return;
        };
        let report = SendMessage::text(owner_id, format!("An error occurred: {error}"));
        if let Err(e) = self.transport.send_message(&report).await {
            tracing::warn!(owner_id, error = %e, "failed to report error to owner");
        }
    }
}

/// Whether `text` is `/start` or `/start@{bot_username}`, optionally followed by a payload.
#[must_use]
pub fn is_start_command(text: &str, bot_username: &str) -> bool {
    let Some(command) = text.split_whitespace().next() else {
        return false;
    };
    match command.split_once('@') {
        Some((name, target)) => name == "/start" && target.eq_ignore_ascii_case(bot_username),
        None => command == "/start",
    }
}

#[must_use]
pub fn start_text(bot_username: &str) -> String {
    format!(
        "👋 Hello! I'm your handy Telegram Bot API assistant.\n\n💡 Usage: <code>@{bot_username} your_query</code> - Quickly search for any method or type in the Telegram Bot API documentation."
    )
}
