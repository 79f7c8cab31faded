//! # API Explorer
//!
//! An interactive dashboard for exploring a small catalog of HTTP endpoints
//! against a simulated backend. Requests never leave the process: the mock
//! backend answers from a fixed rule table after a configurable delay.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use api_explorer::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     println!("serving on {}:{}", settings.server.host, settings.server.port);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: catalog, formatter, key-value editing and the session reducer
//! - **Adapters**: mock backend, session manager and the HTTP handlers
//! - **Config**: file/env/CLI settings with live reload

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::session_manager::SessionManager;
use crate::adapters::ui_handler::UIHandler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `sessions` - Live dashboard session and the backend it sends to
/// * `health_handler` - Health check handler
pub fn create_app(sessions: SessionManager, health_handler: Arc<HealthHandler>) -> Router {
    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_state = ApiState { sessions };

    let api_router = Router::new()
        // Catalog
        .route("/endpoints", get(api_handler::list_endpoints))
        .route("/endpoints/:id/test-cases", get(api_handler::list_endpoint_test_cases))
        .route("/test-cases", get(api_handler::list_test_cases))
        // Session
        .route("/session", get(api_handler::get_session).delete(api_handler::reset_session))
        .route("/session/actions", post(api_handler::apply_action))
        .route("/session/send", post(api_handler::send_request))
        // Formatter
        .route("/format", post(api_handler::format_json))
        .route("/format/value", post(api_handler::format_value))
        .fallback(api_handler::not_found)
        .with_state(api_state);

    health_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(UIHandler::serve)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
