use std::sync::Arc;
use std::time::Instant;

use botapi_docs_core::telegram::InlineQuery;
use botapi_docs_search::{Query, parse_query, search};

use crate::{BotTransport, InlineAnswer, ServiceError, SnapshotCache};

/// Answers inline queries from the cached documentation snapshot.
pub struct InlineQueryService {
    cache: Arc<SnapshotCache>,
}

impl InlineQueryService {
    #[must_use]
    pub fn new(cache: Arc<SnapshotCache>) -> Self {
        Self { cache }
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<SnapshotCache> {
        &self.cache
    }

    /// Builds the answer for `raw_query` without sending it.
    ///
    /// The empty-query answer never touches the snapshot. A failed on-demand
    /// fetch is logged and answered like a query with no hits.
    pub async fn answer_for(&self, raw_query: &str) -> InlineAnswer {
        let query = match parse_query(raw_query) {
            Query::Empty => return InlineAnswer::empty_query(),
            Query::Text(text) => text,
        };

        let snapshot = match self.cache.read_or_refresh().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, query = %query, "failed to load API documentation");
                return InlineAnswer::no_results(&query);
            },
        };

        let started = Instant::now();
        let hits = search(&query, &snapshot);
        let answer = if hits.is_empty() {
            InlineAnswer::no_results(&query)
        } else {
            InlineAnswer::from_hits(&hits)
        };
        tracing::debug!(
            query = %query,
            hits = hits.len(),
            elapsed = ?started.elapsed(),
            "inline query answered"
        );
        answer
    }

    pub async fn handle_inline_query(
        &self,
        transport: &dyn BotTransport,
        inline_query: &InlineQuery,
    ) -> Result<(), ServiceError> {
        let answer = self.answer_for(&inline_query.query).await;
        let request = answer.into_request(inline_query.id.clone());
        transport.answer_inline_query(&request).await?;
        Ok(())
    }
}
