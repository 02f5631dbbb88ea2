use std::sync::Arc;
use std::time::Duration;

use botapi_docs_client::{FetchError, SpecSource};
use botapi_docs_core::{BotConfig, Snapshot, SnapshotStats};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::SnapshotStore;

/// How the documentation snapshot is kept fresh. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// A background task refetches every `interval`.
    Background { interval: Duration },
    /// No background work; every read fetches synchronously.
    OnDemand,
}

impl RefreshMode {
    #[must_use]
    pub fn from_config(config: &BotConfig) -> Self {
        if config.ephemeral_host {
            Self::OnDemand
        } else {
            Self::Background { interval: config.refresh_interval }
        }
    }
}

/// The snapshot store together with the source that refills it.
pub struct SnapshotCache {
    store: Arc<SnapshotStore>,
    source: Arc<dyn SpecSource>,
    mode: RefreshMode,
}

impl SnapshotCache {
    #[must_use]
    pub fn new(store: Arc<SnapshotStore>, source: Arc<dyn SpecSource>, mode: RefreshMode) -> Self {
        Self { store, source, mode }
    }

    #[must_use]
    pub const fn mode(&self) -> RefreshMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Fetches once and installs the result.
    pub async fn refresh_once(&self) -> Result<SnapshotStats, FetchError> {
        let snapshot = self.source.fetch().await?;
        let stats = snapshot.stats();
        self.store.replace(snapshot).await;
        Ok(stats)
    }

    /// Returns the snapshot a query should be answered from.
    ///
    /// In on-demand mode this fetches and installs a fresh snapshot first and
    /// surfaces fetch errors; in background mode it only reads the store.
    pub async fn read_or_refresh(&self) -> Result<Arc<Snapshot>, FetchError> {
        match self.mode {
            RefreshMode::OnDemand => {
                let snapshot = self.source.fetch().await?;
                Ok(self.store.replace(snapshot).await)
            },
            RefreshMode::Background { .. } => Ok(self.store.read().await),
        }
    }

    /// Spawns the background refresher; `None` in on-demand mode.
    ///
    /// The task exits once `shutdown` is cancelled, abandoning an in-flight
    /// fetch but never an in-flight replace.
    pub fn spawn_refresher(self: &Arc<Self>, shutdown: CancellationToken) -> Option<JoinHandle<()>> {
        let RefreshMode::Background { interval } = self.mode else {
            tracing::info!("on-demand refresh mode, background refresher disabled");
            return None;
        };
        let cache = Arc::clone(self);
        Some(tokio::spawn(async move { cache.run_refresher(interval, shutdown).await }))
    }

    async fn run_refresher(&self, interval: Duration, shutdown: CancellationToken) {
        tracing::info!(interval_secs = interval.as_secs(), "API documentation refresher started");
        loop {
            let fetched = tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                result = self.source.fetch() => result,
            };

            match fetched {
                Ok(snapshot) => {
                    let stats = snapshot.stats();
                    self.store.replace(snapshot).await;
                    tracing::info!(
                        methods = stats.methods,
                        types = stats.types,
                        version = stats.version.as_deref().unwrap_or("unknown"),
                        "API documentation refreshed"
                    );
                },
                Err(e) => {
                    tracing::warn!(error = %e, "failed to refresh API documentation, keeping previous snapshot");
                },
            }

            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(interval) => {},
            }
        }
        tracing::info!("API documentation refresher stopped");
    }
}
