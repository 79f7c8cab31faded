//! REST API handlers for the dashboard UI
//!
//! Every handler answers with the `{success, data, error}` envelope.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::adapters::session_manager::SessionManager;
use crate::domain::catalog::EndpointGroup;
use crate::domain::formatter::{self, JsonInput, Rendered};
use crate::domain::session::{Action, Session, Stage};
use crate::domain::{ApiResponse, Endpoint, RequestDraft, StatusClass, TestCase};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub sessions: SessionManager,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> Envelope<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Response as shown by the response panel.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub body_size: usize,
    pub status_class: StatusClass,
    pub body_html: Option<String>,
    pub body_error: Option<String>,
}

impl From<&ApiResponse> for ResponseView {
    fn from(response: &ApiResponse) -> Self {
        let (body_html, body_error) =
            match formatter::render(JsonInput::Decoded(&response.body)) {
                Ok(rendered) => (Some(rendered.to_html()), None),
                Err(e) => (None, Some(e.to_string())),
            };
        Self {
            response: response.clone(),
            body_size: response.body_size(),
            status_class: response.status_class(),
            body_html,
            body_error,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub stage: Stage,
    pub loading: bool,
    pub selected_endpoint: Option<Endpoint>,
    pub selected_test_case: Option<TestCase>,
    pub request: RequestDraft,
    pub response: Option<ResponseView>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            stage: session.stage(),
            loading: session.is_loading(),
            selected_endpoint: session.selected_endpoint.clone(),
            selected_test_case: session.selected_test_case.clone(),
            request: session.request.clone(),
            response: session.response().map(ResponseView::from),
        }
    }
}

#[derive(Deserialize)]
pub struct FormatRequest {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct FormatResult {
    pub text: String,
    pub html: String,
}

impl From<Rendered> for FormatResult {
    fn from(rendered: Rendered) -> Self {
        Self {
            text: rendered.to_plain(),
            html: rendered.to_html(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

pub async fn list_endpoints(State(state): State<ApiState>) -> impl IntoResponse {
    let groups: Vec<EndpointGroup> = state.sessions.catalog().grouped();
    (StatusCode::OK, Json(Envelope::success(groups)))
}

pub async fn list_test_cases(State(state): State<ApiState>) -> impl IntoResponse {
    let test_cases = state.sessions.catalog().test_cases().to_vec();
    (StatusCode::OK, Json(Envelope::success(test_cases)))
}

pub async fn list_endpoint_test_cases(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.sessions.catalog();
    if catalog.endpoint(&id).is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(Envelope::<Vec<TestCase>>::error(format!("Endpoint not found: '{}'", id))),
        );
    }
    let test_cases: Vec<TestCase> = catalog.test_cases_for(&id).into_iter().cloned().collect();
    (StatusCode::OK, Json(Envelope::success(test_cases)))
}

// ============================================================================
// Session
// ============================================================================

pub async fn get_session(State(state): State<ApiState>) -> impl IntoResponse {
    let session = state.sessions.snapshot().await;
    (StatusCode::OK, Json(Envelope::success(SessionView::from(&session))))
}

pub async fn apply_action(
    State(state): State<ApiState>,
    Json(action): Json<Action>,
) -> impl IntoResponse {
    match state.sessions.apply(action).await {
        Ok(session) => (StatusCode::OK, Json(Envelope::success(SessionView::from(&session)))),
        Err(e) => (
            e.status_code(),
            Json(Envelope::<SessionView>::error(e.to_string())),
        ),
    }
}

pub async fn send_request(State(state): State<ApiState>) -> impl IntoResponse {
    let session = state.sessions.send().await;
    (StatusCode::OK, Json(Envelope::success(SessionView::from(&session))))
}

pub async fn reset_session(State(state): State<ApiState>) -> impl IntoResponse {
    let session = state.sessions.reset().await;
    (StatusCode::OK, Json(Envelope::success(SessionView::from(&session))))
}

// ============================================================================
// Formatter
// ============================================================================

pub async fn format_json(Json(request): Json<FormatRequest>) -> impl IntoResponse {
    match formatter::render(JsonInput::Raw(&request.text)) {
        Ok(rendered) => (StatusCode::OK, Json(Envelope::success(FormatResult::from(rendered)))),
        Err(e) => {
            warn!("Formatting rejected: {:?}", e);
            (e.status_code(), Json(Envelope::<FormatResult>::error(e.to_string())))
        }
    }
}

/// Formats an already decoded value; never fails.
pub async fn format_value(Json(value): Json<Value>) -> impl IntoResponse {
    let rendered = formatter::format_value(&value, 0);
    (StatusCode::OK, Json(Envelope::success(FormatResult::from(rendered))))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(Envelope::<()>::error("Not found")))
}
