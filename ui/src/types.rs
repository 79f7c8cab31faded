//! Shared types for the API Explorer UI
//!
//! These types mirror the backend API response structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub type KeyValues = BTreeMap<String, String>;

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// Badge colours for the method selector and test case chips
    pub fn badge_class(&self) -> &'static str {
        match self {
            HttpMethod::Get => "bg-blue-100 text-blue-700",
            HttpMethod::Post => "bg-green-100 text-green-700",
            HttpMethod::Put => "bg-yellow-100 text-yellow-700",
            HttpMethod::Delete => "bg-red-100 text-red-700",
            HttpMethod::Patch => "bg-purple-100 text-purple-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Endpoint {
    pub id: String,
    pub name: String,
    pub path: String,
    pub category: String,
}

impl Endpoint {
    pub fn has_path_param(&self) -> bool {
        self.path.contains("{id}")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EndpointGroup {
    pub category: String,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub endpoint_id: String,
    pub method: HttpMethod,
    pub headers: KeyValues,
    pub body: String,
    pub query_params: KeyValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub headers: KeyValues,
    pub body: String,
    pub query_params: KeyValues,
}

impl RequestDraft {
    /// Full request line preview, e.g. `/orders?limit=10&page=1`.
    pub fn url_preview(&self, path: &str) -> String {
        if self.query_params.is_empty() {
            return path.to_string();
        }
        let query: Vec<String> = self
            .query_params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", path, query.join("&"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Success,
    Redirect,
    Error,
}

impl StatusClass {
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusClass::Success => "bg-green-100 text-green-800",
            StatusClass::Redirect => "bg-yellow-100 text-yellow-800",
            StatusClass::Error => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
    pub status: u16,
    pub status_text: String,
    pub response_time: u64,
    pub body: Value,
    pub headers: KeyValues,
    pub body_size: usize,
    pub status_class: StatusClass,
    pub body_html: Option<String>,
    pub body_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    NoSelection,
    Selected,
    Pending,
    Available,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub stage: Stage,
    pub loading: bool,
    pub selected_endpoint: Option<Endpoint>,
    pub selected_test_case: Option<TestCase>,
    pub request: RequestDraft,
    pub response: Option<ResponseView>,
}

/// Session transitions accepted by `POST /api/session/actions`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SelectEndpoint { id: String },
    SelectTestCase { id: String },
    ClearSelection,
    SetMethod { method: HttpMethod },
    AddHeader { key: String, value: String },
    RemoveHeader { key: String },
    AddQueryParam { key: String, value: String },
    RemoveQueryParam { key: String },
    SetBody { body: String },
    FormatBody,
}

/// Byte count as shown next to the status badge
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_preview_encodes_query() {
        let mut draft = RequestDraft::default();
        assert_eq!(draft.url_preview("/orders"), "/orders");

        draft.query_params.insert("page".to_string(), "1".to_string());
        draft.query_params.insert("q".to_string(), "a b".to_string());
        assert_eq!(draft.url_preview("/orders"), "/orders?page=1&q=a%20b");
    }

    #[test]
    fn test_action_wire_format() {
        let action = Action::AddHeader {
            key: "Accept".to_string(),
            value: "application/json".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "add_header", "key": "Accept", "value": "application/json" })
        );
        assert_eq!(
            serde_json::to_value(Action::FormatBody).unwrap(),
            json!({ "type": "format_body" })
        );
    }

    #[test]
    fn test_session_view_parses_snapshot() {
        let snapshot = json!({
            "stage": "available",
            "loading": false,
            "selectedEndpoint": { "id": "9", "name": "Orders List", "path": "/orders", "category": "Orders" },
            "selectedTestCase": null,
            "request": { "method": "GET", "headers": {}, "body": "", "queryParams": {} },
            "response": {
                "status": 404,
                "statusText": "Not Found",
                "responseTime": 1001,
                "body": { "error": "Endpoint not found" },
                "headers": { "content-type": "application/json" },
                "bodySize": 30,
                "statusClass": "error",
                "bodyHtml": null,
                "bodyError": "Invalid JSON"
            }
        });
        let view: SessionView = serde_json::from_value(snapshot).unwrap();
        assert_eq!(view.stage, Stage::Available);
        let response = view.response.unwrap();
        assert_eq!(response.status_class, StatusClass::Error);
        assert_eq!(response.body_size, 30);
    }

    #[test]
    fn test_method_helpers() {
        assert_eq!(HttpMethod::parse("PATCH"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("patch"), None);
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(30), "30 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }
}
