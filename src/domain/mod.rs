use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub mod catalog;
pub mod error;
pub mod formatter;
pub mod key_value;
pub mod session;

pub use error::{DispatchError, FormatError, SessionError};

/// Header and query-parameter mapping. Ordered by key for stable display.
pub type KeyValues = BTreeMap<String, String>;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

    /// Methods that usually carry a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, categorized API path shown in the sidebar.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub id: String,
    pub name: String,
    pub path: String,
    pub category: String,
}

impl Endpoint {
    /// True for paths addressing a single item, e.g. `/users/{id}`.
    pub fn has_path_param(&self) -> bool {
        self.path.contains("{id}")
    }
}

/// A saved request preset bound to one endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
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

/// The live, user-editable request that drives the next send.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub headers: KeyValues,
    pub body: String,
    pub query_params: KeyValues,
}

impl From<&TestCase> for RequestDraft {
    fn from(test_case: &TestCase) -> Self {
        Self {
            method: test_case.method,
            headers: test_case.headers.clone(),
            body: test_case.body.clone(),
            query_params: test_case.query_params.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Success,
    Redirect,
    Error,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        if status < 300 {
            StatusClass::Success
        } else if status < 400 {
            StatusClass::Redirect
        } else {
            StatusClass::Error
        }
    }
}

/// A simulated backend reply. Produced once per send and replaces the previous one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    /// Elapsed wall-clock milliseconds, stamped by the caller of the dispatcher.
    pub response_time: u64,
    pub body: Value,
    pub headers: KeyValues,
}

impl ApiResponse {
    /// Size in bytes of the compact JSON encoding of the body.
    pub fn body_size(&self) -> usize {
        serde_json::to_string(&self.body)
            .map(|s| s.len())
            .unwrap_or(0)
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_status(self.status)
    }
}

/// Something that answers a request for an endpoint.
#[async_trait]
pub trait BackendPort: Send + Sync {
    async fn send(
        &self,
        endpoint: &Endpoint,
        request: &RequestDraft,
    ) -> Result<ApiResponse, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_body_tab() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_method_serializes_uppercase() {
        assert_eq!(serde_json::to_value(HttpMethod::Delete).unwrap(), json!("DELETE"));
        let parsed: HttpMethod = serde_json::from_value(json!("PATCH")).unwrap();
        assert_eq!(parsed, HttpMethod::Patch);
    }

    #[test]
    fn test_status_class_boundaries() {
        assert_eq!(StatusClass::from_status(204), StatusClass::Success);
        assert_eq!(StatusClass::from_status(299), StatusClass::Success);
        assert_eq!(StatusClass::from_status(301), StatusClass::Redirect);
        assert_eq!(StatusClass::from_status(404), StatusClass::Error);
        assert_eq!(StatusClass::from_status(500), StatusClass::Error);
    }

    #[test]
    fn test_body_size_counts_compact_json() {
        let response = ApiResponse {
            status: 404,
            status_text: "Not Found".to_string(),
            response_time: 0,
            body: json!({ "error": "Endpoint not found" }),
            headers: KeyValues::new(),
        };
        assert_eq!(response.body_size(), 30);

        let empty = ApiResponse {
            body: Value::Null,
            ..response
        };
        assert_eq!(empty.body_size(), 4);
    }

    #[test]
    fn test_api_response_wire_names() {
        let response = ApiResponse {
            status: 200,
            status_text: "OK".to_string(),
            response_time: 12,
            body: json!([]),
            headers: KeyValues::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusText"], "OK");
        assert_eq!(value["responseTime"], 12);
    }
}
