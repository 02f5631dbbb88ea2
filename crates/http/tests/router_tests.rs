#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use botapi_docs_client::{BotApiError, BotClient, FetchError, SpecSource};
use botapi_docs_core::telegram::{AnswerInlineQuery, SendMessage};
use botapi_docs_core::{Method, Snapshot};
use botapi_docs_http::{AppState, configure_webhook, create_router};
use botapi_docs_service::{
    BotTransport, Dispatcher, InlineQueryService, RefreshMode, SnapshotCache, SnapshotStore,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "123:abc";
const SECRET: &str = "s3cret";

#[derive(Default)]
struct RecordingTransport {
    answers: Mutex<Vec<AnswerInlineQuery>>,
}

#[async_trait]
impl BotTransport for RecordingTransport {
    async fn answer_inline_query(&self, answer: &AnswerInlineQuery) -> Result<(), BotApiError> {
        self.answers.lock().unwrap().push(answer.clone());
        Ok(())
    }

    async fn send_message(&self, _message: &SendMessage) -> Result<(), BotApiError> {
        Ok(())
    }
}

struct FailingSource;

#[async_trait]
impl SpecSource for FailingSource {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        Err(FetchError::HttpStatus { code: 503 })
    }
}

fn state_with(snapshot: Snapshot, mode: RefreshMode, transport: Arc<RecordingTransport>) -> Arc<AppState> {
    let cache = Arc::new(SnapshotCache::new(
        Arc::new(SnapshotStore::with_snapshot(snapshot)),
        Arc::new(FailingSource),
        mode,
    ));
    let dispatcher = Arc::new(Dispatcher::new(
        InlineQueryService::new(Arc::clone(&cache)),
        transport as Arc<dyn BotTransport>,
        None,
        "docs_bot",
    ));
    Arc::new(AppState { dispatcher, cache, bot_token: TOKEN.to_owned(), secret_token: SECRET.to_owned() })
}

fn background() -> RefreshMode {
    RefreshMode::Background { interval: Duration::from_secs(3600) }
}

fn loaded_snapshot() -> Snapshot {
    Snapshot::from_entities([Method::new("getMe", "https://core.telegram.org/bots/api#getme")], [])
}

fn update_request(token: &str, secret: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("/{token}"))
        .header("content-type", "application/json");
    if let Some(secret) = secret {
        builder = builder.header("X-Telegram-Bot-Api-Secret-Token", secret);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

fn inline_update_body() -> String {
    json!({
        "update_id": 5,
        "inline_query": {
            "id": "iq5",
            "from": {"id": 42, "is_bot": false, "first_name": "Ada"},
            "query": "getme",
            "offset": ""
        }
    })
    .to_string()
}

async fn body_json_of(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_and_version() {
    let state = state_with(Snapshot::empty(), background(), Arc::default());

    let response = create_router(Arc::clone(&state))
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(to_bytes(response.into_body(), usize::MAX).await.unwrap(), "ok");

    let response = create_router(state)
        .oneshot(Request::get("/api/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json_of(response).await["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_readiness_waits_for_first_snapshot() {
    let state = state_with(Snapshot::empty(), background(), Arc::default());
    let response = create_router(state)
        .oneshot(Request::get("/api/readiness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let state = state_with(loaded_snapshot(), background(), Arc::default());
    let response = create_router(state)
        .oneshot(Request::get("/api/readiness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json_of(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["refresh_mode"], "background");
    assert_eq!(body["methods"], 1);
    assert_eq!(body["types"], 0);
}

#[tokio::test]
async fn test_readiness_on_demand_is_always_ready() {
    let state = state_with(Snapshot::empty(), RefreshMode::OnDemand, Arc::default());
    let response = create_router(state)
        .oneshot(Request::get("/api/readiness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json_of(response).await["refresh_mode"], "on_demand");
}

#[tokio::test]
async fn test_webhook_rejects_bad_secret() {
    let transport = Arc::new(RecordingTransport::default());
    let state = state_with(loaded_snapshot(), background(), Arc::clone(&transport));

    for secret in [None, Some("wrong")] {
        let response = create_router(Arc::clone(&state))
            .oneshot(update_request(TOKEN, secret, &inline_update_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(transport.answers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_webhook_acknowledges_unknown_token_and_bad_body() {
    let transport = Arc::new(RecordingTransport::default());
    let state = state_with(loaded_snapshot(), background(), Arc::clone(&transport));

    let response = create_router(Arc::clone(&state))
        .oneshot(update_request("999:other", Some(SECRET), &inline_update_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = create_router(state)
        .oneshot(update_request(TOKEN, Some(SECRET), "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(transport.answers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_webhook_dispatches_update() {
    let transport = Arc::new(RecordingTransport::default());
    let state = state_with(loaded_snapshot(), background(), Arc::clone(&transport));

    let response = create_router(state)
        .oneshot(update_request(TOKEN, Some(SECRET), &inline_update_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::timeout(Duration::from_secs(5), async {
        while transport.answers.lock().unwrap().is_empty() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();
    let answers = transport.answers.lock().unwrap();
    assert_eq!(answers[0].inline_query_id, "iq5");
    assert_eq!(answers[0].results.len(), 1);
}

#[tokio::test]
async fn test_configure_webhook_registers_token_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/setWebhook")))
        .and(body_json(json!({
            "url": format!("https://bot.example.org/{TOKEN}"),
            "max_connections": 40,
            "drop_pending_updates": true,
            "allowed_updates": ["message", "inline_query"],
            "secret_token": SECRET
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = BotClient::with_base_url(TOKEN.to_owned(), server.uri()).unwrap();
    configure_webhook(&client, "https://bot.example.org/", SECRET).await.unwrap();
}

#[tokio::test]
async fn test_configure_webhook_surfaces_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/setWebhook")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: bad webhook: HTTPS url must be provided for webhook"
        })))
        .mount(&server)
        .await;

    let client = BotClient::with_base_url(TOKEN.to_owned(), server.uri()).unwrap();
    let err = configure_webhook(&client, "http://insecure/", SECRET).await.unwrap_err();
    assert!(matches!(err, BotApiError::Api { code: 400, .. }));
}
