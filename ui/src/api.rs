//! API client for the API Explorer backend

use crate::types::*;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

// ============================================================================
// Catalog
// ============================================================================

pub async fn list_endpoints() -> Result<Vec<EndpointGroup>, String> {
    let url = format!("{}/endpoints", API_BASE);
    fetch_json::<Vec<EndpointGroup>>(&url).await
}

pub async fn list_test_cases(endpoint_id: &str) -> Result<Vec<TestCase>, String> {
    let url = format!(
        "{}/endpoints/{}/test-cases",
        API_BASE,
        urlencoding::encode(endpoint_id)
    );
    fetch_json::<Vec<TestCase>>(&url).await
}

// ============================================================================
// Session
// ============================================================================

pub async fn get_session() -> Result<SessionView, String> {
    let url = format!("{}/session", API_BASE);
    fetch_json::<SessionView>(&url).await
}

pub async fn apply_action(action: &Action) -> Result<SessionView, String> {
    let url = format!("{}/session/actions", API_BASE);
    post_json::<Action, SessionView>(&url, action).await
}

/// Resolves once the simulated backend has answered.
pub async fn send_request() -> Result<SessionView, String> {
    let url = format!("{}/session/send", API_BASE);
    post_json::<(), SessionView>(&url, &()).await
}

// ============================================================================
// Helpers
// ============================================================================

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    unwrap_envelope(api_response)
}

async fn post_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<R> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    unwrap_envelope(api_response)
}

fn unwrap_envelope<T>(api_response: ApiResponse<T>) -> Result<T, String> {
    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
