use botapi_docs_core::SnapshotStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub refresh_mode: &'static str,
    #[serde(flatten)]
    pub snapshot: SnapshotStats,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
