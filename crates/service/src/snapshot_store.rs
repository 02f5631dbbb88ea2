use std::sync::Arc;

use botapi_docs_core::Snapshot;
use tokio::sync::RwLock;

/// Holds the current documentation snapshot.
///
/// Readers take the shared lock only to clone the `Arc`, then search and
/// render without holding it. A writer swaps the whole `Arc`, so a reader
/// sees either the previous pair or the new pair, never a mix.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    /// A store holding the empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::empty())
    }

    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    /// Returns the current snapshot; keep it for the duration of one unit of work.
    pub async fn read(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.current.read().await)
    }

    /// Installs `snapshot` and returns the installed handle.
    pub async fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        let previous = {
            let mut guard = self.current.write().await;
            std::mem::replace(&mut *guard, Arc::clone(&next))
        };
        // Dropped outside the lock; may be the last reference to a large map.
        drop(previous);
        next
    }
}
