use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use botapi_docs_client::{BotClient, SpecFetcher};
use botapi_docs_core::BotConfig;
use botapi_docs_http::{AppState, configure_webhook, serve};
use botapi_docs_service::{
    BotTransport, Dispatcher, InlineQueryService, RefreshMode, SnapshotCache, SnapshotStore,
    run_polling,
};
use tokio_util::sync::CancellationToken;

pub(crate) async fn run(config: BotConfig) -> Result<()> {
    let token = config.require_token()?.to_owned();
    let client = Arc::new(BotClient::new(token.clone())?);
    let me = client.get_me().await?;
    let username = me.username.clone().unwrap_or_default();

    if config.owner_id.is_none() {
        tracing::warn!("OWNER_ID not set, error diagnostics will only be logged");
    }

    let mode = RefreshMode::from_config(&config);
    let cache = Arc::new(SnapshotCache::new(
        Arc::new(SnapshotStore::new()),
        Arc::new(SpecFetcher::new()?),
        mode,
    ));
    let dispatcher = Arc::new(Dispatcher::new(
        InlineQueryService::new(Arc::clone(&cache)),
        Arc::clone(&client) as Arc<dyn BotTransport>,
        config.owner_id,
        username.clone(),
    ));

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            tracing::info!("shutdown signal received");
            shutdown.cancel();
        }
    });
    let refresher = cache.spawn_refresher(shutdown.clone());

    let webhook = match config.webhook_url.as_deref() {
        Some(url) => {
            let secret = config.webhook_secret.clone().unwrap_or_else(generate_secret);
            match configure_webhook(&client, url, &secret).await {
                Ok(()) => Some(secret),
                Err(e) => {
                    tracing::warn!(error = %e, "webhook configuration failed, falling back to polling");
                    None
                },
            }
        },
        None => {
            tracing::info!("WEBHOOK_URL not set, using long polling");
            None
        },
    };

    let transport = if webhook.is_some() { "webhook" } else { "polling" };
    tracing::info!(
        first_name = %me.first_name,
        username = %username,
        transport,
        refresh = ?mode,
        "bot started"
    );

    let result = match webhook {
        Some(secret_token) => {
            let state = Arc::new(AppState { dispatcher, cache, bot_token: token, secret_token });
            let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
            serve(state, addr, shutdown.clone()).await
        },
        None => run_polling(client, dispatcher, shutdown.clone()).await.map_err(Into::into),
    };

    shutdown.cancel();
    if let Some(refresher) = refresher {
        refresher.await?;
    }
    tracing::info!("bot stopped");
    result
}

fn generate_secret() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
