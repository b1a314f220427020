//! Liveness check (GET /health)

use axum::{extract::State, Json};
use serde::Serialize;

use crate::backend::realtime::LiveRegistry;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Connections currently registered for live updates
    pub subscribers: usize,
}

pub async fn health_check(State(live): State<LiveRegistry>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        subscribers: live.subscriber_count(),
    })
}
