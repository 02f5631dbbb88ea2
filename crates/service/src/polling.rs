use std::sync::Arc;
use std::time::Duration;

use botapi_docs_client::{BotApiError, BotClient};
use botapi_docs_core::telegram::GetUpdates;
use botapi_docs_core::{ALLOWED_UPDATES, LONG_POLL_TIMEOUT_SECS};
use tokio_util::sync::CancellationToken;

use crate::Dispatcher;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Receives updates by long polling until `shutdown` is cancelled.
///
/// Clears any registered webhook first; that call is the only error returned.
/// Every update is dispatched on its own task.
pub async fn run_polling(
    client: Arc<BotClient>,
    dispatcher: Arc<Dispatcher>,
    shutdown: CancellationToken,
) -> Result<(), BotApiError> {
    client.delete_webhook(true).await?;
    tracing::info!("long polling started");

    let mut params = GetUpdates {
        offset: None,
        timeout: LONG_POLL_TIMEOUT_SECS,
        allowed_updates: ALLOWED_UPDATES.iter().map(|s| (*s).to_owned()).collect(),
    };
    let mut backoff = INITIAL_BACKOFF;

    loop {
        let polled = tokio::select! {
            biased;
            () = shutdown.cancelled() => break,
            result = client.get_updates(&params) => result,
        };

        match polled {
            Ok(updates) => {
                backoff = INITIAL_BACKOFF;
                if let Some(last) = updates.last() {
                    params.offset = Some(last.update_id + 1);
                }
                for update in updates {
                    dispatcher.spawn(update);
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, retry_in_secs = backoff.as_secs(), "getUpdates failed");
                tokio::select! {
                    biased;
                    () = shutdown.cancelled() => break,
                    () = tokio::time::sleep(backoff) => {},
                }
                backoff = next_backoff(backoff);
            },
        }
    }

    tracing::info!("long polling stopped");
    Ok(())
}

fn next_backoff(current: Duration) -> Duration {
    current.saturating_mul(2).min(MAX_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let mut delay = INITIAL_BACKOFF;
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(delay.as_secs());
            delay = next_backoff(delay);
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16, 30, 30]);
    }
}
