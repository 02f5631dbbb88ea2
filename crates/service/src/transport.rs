use async_trait::async_trait;
use botapi_docs_client::{BotApiError, BotClient};
use botapi_docs_core::telegram::{AnswerInlineQuery, SendMessage};

/// Outbound side of the Bot API used by update handlers.
#[async_trait]
pub trait BotTransport: Send + Sync {
    async fn answer_inline_query(&self, answer: &AnswerInlineQuery) -> Result<(), BotApiError>;

    async fn send_message(&self, message: &SendMessage) -> Result<(), BotApiError>;
}

#[async_trait]
impl BotTransport for BotClient {
    async fn answer_inline_query(&self, answer: &AnswerInlineQuery) -> Result<(), BotApiError> {
        let accepted = BotClient::answer_inline_query(self, answer).await?;
        if !accepted {
            tracing::warn!(inline_query_id = %answer.inline_query_id, "answerInlineQuery returned false");
        }
        Ok(())
    }

    async fn send_message(&self, message: &SendMessage) -> Result<(), BotApiError> {
        let sent = BotClient::send_message(self, message).await?;
        tracing::debug!(chat_id = sent.chat.id, message_id = sent.message_id, "message sent");
        Ok(())
    }
}
