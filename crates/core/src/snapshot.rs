//! One consistent version of the upstream documentation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{ApiSpec, Method, Type};

/// Immutable `(methods, types)` pair plus the metadata of the fetch that produced it.
///
/// Keys are case-sensitive identifiers. Shared behind an `Arc` and never
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub methods: HashMap<String, Method>,
    pub types: HashMap<String, Type>,
    pub version: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Summary of a snapshot for logs and readiness probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    pub methods: usize,
    pub types: usize,
    pub version: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// The snapshot installed before any fetch succeeded: empty maps, no metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a freshly decoded document.
    #[must_use]
    pub fn from_spec(spec: ApiSpec, fetched_at: DateTime<Utc>) -> Self {
        Self {
            methods: spec.methods,
            types: spec.types,
            version: spec.version,
            fetched_at: Some(fetched_at),
        }
    }

    /// Builds an undated snapshot from entity lists, keyed by entity name.
    #[must_use]
    pub fn from_entities(
        methods: impl IntoIterator<Item = Method>,
        types: impl IntoIterator<Item = Type>,
    ) -> Self {
        Self {
            methods: methods.into_iter().map(|m| (m.name.clone(), m)).collect(),
            types: types.into_iter().map(|t| (t.name.clone(), t)).collect(),
            version: None,
            fetched_at: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.types.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            methods: self.methods.len(),
            types: self.types.len(),
            version: self.version.clone(),
            fetched_at: self.fetched_at,
        }
    }
}
