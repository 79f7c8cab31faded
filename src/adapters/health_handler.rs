use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::catalog::Catalog;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub catalog: String,
    pub backend: String,
}

pub struct HealthHandler {
    catalog: Arc<Catalog>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks: HealthChecks {
                catalog: format!("{} endpoints", self.catalog.endpoints().len()),
                backend: "mock".to_string(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - the dashboard is useless without endpoints to pick
    pub async fn ready(&self) -> impl IntoResponse {
        if self.catalog.is_empty() {
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": "No endpoints loaded"
            })))
        } else {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "message": "Server is ready to accept requests"
            })))
        }
    }

    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}
