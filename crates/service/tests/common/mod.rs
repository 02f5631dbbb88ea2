#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use botapi_docs_client::{BotApiError, FetchError, SpecSource};
use botapi_docs_core::telegram::{
    AnswerInlineQuery, InlineQuery, InlineQueryResult, InlineQueryResultArticle, SendMessage, User,
};
use botapi_docs_core::{Field, Method, Snapshot, Type};
use botapi_docs_service::{BotTransport, InlineQueryService, RefreshMode, SnapshotCache, SnapshotStore};

/// Records every outbound call; optionally rejects inline answers.
#[derive(Default)]
pub struct RecordingTransport {
    pub answers: Mutex<Vec<AnswerInlineQuery>>,
    pub messages: Mutex<Vec<SendMessage>>,
    pub reject_answers: bool,
}

impl RecordingTransport {
    pub fn rejecting() -> Self {
        Self { reject_answers: true, ..Self::default() }
    }

    pub fn answers(&self) -> Vec<AnswerInlineQuery> {
        self.answers.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<SendMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl BotTransport for RecordingTransport {
    async fn answer_inline_query(&self, answer: &AnswerInlineQuery) -> Result<(), BotApiError> {
        self.answers.lock().unwrap().push(answer.clone());
        if self.reject_answers {
            return Err(BotApiError::Api { code: 400, description: "Bad Request: query is too old".to_owned() });
        }
        Ok(())
    }

    async fn send_message(&self, message: &SendMessage) -> Result<(), BotApiError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// A source that always fails, for caches whose store is pre-seeded.
pub struct UnreachableSource;

#[async_trait]
impl SpecSource for UnreachableSource {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        Err(FetchError::HttpStatus { code: 503 })
    }
}

pub fn send_message_method() -> Method {
    let mut method = Method::new("sendMessage", "https://core.telegram.org/bots/api#sendmessage");
    method.description = vec!["Use this method to send text messages.".to_owned()];
    method.returns = vec!["Message".to_owned()];
    method.fields = vec![Field {
        name: "chat_id".to_owned(),
        types: vec!["Integer".to_owned(), "String".to_owned()],
        required: true,
        description: "Unique identifier for the target chat".to_owned(),
    }];
    method
}

pub fn sample_snapshot() -> Snapshot {
    let mut message = Type::new("Message", "https://core.telegram.org/bots/api#message");
    message.description = vec!["This object represents a <em>message</em>.".to_owned()];
    Snapshot::from_entities(
        [
            send_message_method(),
            Method::new("sendPhoto", "https://core.telegram.org/bots/api#sendphoto"),
            Method::new("getMe", "https://core.telegram.org/bots/api#getme"),
        ],
        [message, Type::new("User", "https://core.telegram.org/bots/api#user")],
    )
}

pub fn background_cache(snapshot: Snapshot) -> Arc<SnapshotCache> {
    Arc::new(SnapshotCache::new(
        Arc::new(SnapshotStore::with_snapshot(snapshot)),
        Arc::new(UnreachableSource),
        RefreshMode::Background { interval: Duration::from_secs(3600) },
    ))
}

pub fn service_with(snapshot: Snapshot) -> InlineQueryService {
    InlineQueryService::new(background_cache(snapshot))
}

pub fn inline_query(id: &str, query: &str) -> InlineQuery {
    InlineQuery {
        id: id.to_owned(),
        from: user(),
        query: query.to_owned(),
        offset: String::new(),
    }
}

pub fn user() -> User {
    User { id: 42, is_bot: false, first_name: "Ada".to_owned(), username: Some("ada".to_owned()) }
}

pub fn articles(answer: &AnswerInlineQuery) -> Vec<&InlineQueryResultArticle> {
    answer
        .results
        .iter()
        .map(|result| {
            let InlineQueryResult::Article(article) = result;
            article
        })
        .collect()
}
