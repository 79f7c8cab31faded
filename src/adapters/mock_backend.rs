//! Simulated backend
//!
//! Requests are answered from a fixed, ordered rule table. Each rule pairs a path
//! matcher with a handler; the first matching rule produces the reply.

use crate::config::Settings;
use crate::domain::{
    ApiResponse, BackendPort, DispatchError, Endpoint, HttpMethod, KeyValues, RequestDraft,
};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

/// What the dispatcher looks at: never the request headers.
#[derive(Debug, Clone, Copy)]
pub struct DispatchRequest<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub body: &'a str,
    pub query_params: &'a KeyValues,
}

impl<'a> DispatchRequest<'a> {
    pub fn new(path: &'a str, request: &'a RequestDraft) -> Self {
        Self {
            path,
            method: request.method,
            body: &request.body,
            query_params: &request.query_params,
        }
    }
}

/// A reply before the elapsed time is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub status_text: &'static str,
    pub body: Value,
    pub headers: KeyValues,
}

impl Reply {
    fn new(status: u16, status_text: &'static str, body: Value) -> Self {
        Self {
            status,
            status_text,
            body,
            headers: KeyValues::new(),
        }
    }

    fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    fn json(self) -> Self {
        self.header("content-type", "application/json")
    }

    pub fn into_response(self, response_time: u64) -> ApiResponse {
        ApiResponse {
            status: self.status,
            status_text: self.status_text.to_string(),
            response_time,
            body: self.body,
            headers: self.headers,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    PathContains(&'static str),
    Any,
}

impl Matcher {
    pub fn matches(&self, request: &DispatchRequest<'_>) -> bool {
        match self {
            Matcher::PathContains(segment) => request.path.contains(segment),
            Matcher::Any => true,
        }
    }
}

type Handler = fn(&DispatchRequest<'_>) -> Result<Reply, DispatchError>;

pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    handler: Handler,
}

/// Evaluated top to bottom; the last rule matches everything.
pub static RULES: [Rule; 4] = [
    Rule {
        name: "users",
        matcher: Matcher::PathContains("/users"),
        handler: users,
    },
    Rule {
        name: "products",
        matcher: Matcher::PathContains("/products"),
        handler: products,
    },
    Rule {
        name: "orders",
        matcher: Matcher::PathContains("/orders"),
        handler: orders,
    },
    Rule {
        name: "not_found",
        matcher: Matcher::Any,
        handler: not_found,
    },
];

/// The rule that answers `request`.
pub fn matching_rule(request: &DispatchRequest<'_>) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matcher.matches(request))
}

pub fn dispatch(request: &DispatchRequest<'_>) -> Result<Reply, DispatchError> {
    let rule = matching_rule(request)
        .ok_or_else(|| DispatchError::Internal("no dispatch rule matched".to_string()))?;
    debug!(
        rule = rule.name,
        path = request.path,
        method = %request.method,
        "Dispatching mock request"
    );
    (rule.handler)(request)
}

fn users(request: &DispatchRequest<'_>) -> Result<Reply, DispatchError> {
    match request.method {
        HttpMethod::Get => Ok(Reply::new(
            200,
            "OK",
            json!([
                { "id": 1, "name": "Alice Johnson", "email": "alice@example.com" },
                { "id": 2, "name": "Bob Smith", "email": "bob@example.com" },
                { "id": 3, "name": "Charlie Brown", "email": "charlie@example.com" }
            ]),
        )
        .json()
        .header("cache-control", "max-age=3600")),
        HttpMethod::Post => {
            let mut created = Map::new();
            created.insert("id".to_string(), json!(4));
            created.extend(request_object(request.body));
            Ok(Reply::new(201, "Created", Value::Object(created))
                .json()
                .header("location", "/users/4"))
        }
        _ => Ok(Reply::new(204, "No Content", Value::Null)),
    }
}

/// Parses the POST body into entries to merge after `id`. Empty or malformed
/// text adds nothing.
///
/// Merging follows object-spread rules: arrays contribute their indices as keys,
/// strings one key per character, and scalars nothing at all.
fn request_object(body: &str) -> Map<String, Value> {
    if body.trim().is_empty() {
        return Map::new();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        Ok(Value::String(text)) => text
            .chars()
            .enumerate()
            .map(|(index, c)| (index.to_string(), Value::String(c.to_string())))
            .collect(),
        Ok(_) => Map::new(),
        Err(e) => {
            warn!("Request body is not valid JSON, using an empty object: {}", e);
            Map::new()
        }
    }
}

fn products(_request: &DispatchRequest<'_>) -> Result<Reply, DispatchError> {
    Ok(Reply::new(
        200,
        "OK",
        json!([
            { "id": 101, "name": "Laptop", "price": 1299.99 },
            { "id": 102, "name": "Smartphone", "price": 899.99 },
            { "id": 103, "name": "Headphones", "price": 199.99 }
        ]),
    )
    .json()
    .header("cache-control", "max-age=3600"))
}

fn orders(request: &DispatchRequest<'_>) -> Result<Reply, DispatchError> {
    let param = |name: &str, default: &str| {
        request
            .query_params
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    Ok(Reply::new(
        200,
        "OK",
        json!([
            { "id": 1001, "user_id": 2, "total": 1299.99, "status": "shipped" },
            { "id": 1002, "user_id": 1, "total": 899.99, "status": "processing" },
            { "id": 1003, "user_id": 3, "total": 199.99, "status": "delivered" }
        ]),
    )
    .json()
    .header("pagination-count", "3")
    .header("pagination-page", param("page", "1"))
    .header("pagination-limit", param("limit", "10")))
}

fn not_found(_request: &DispatchRequest<'_>) -> Result<Reply, DispatchError> {
    Ok(Reply::new(404, "Not Found", json!({ "error": "Endpoint not found" })).json())
}

/// [`BackendPort`] that waits the configured latency, then answers from [`RULES`].
pub struct MockBackend {
    settings: Arc<RwLock<Settings>>,
}

impl MockBackend {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl BackendPort for MockBackend {
    async fn send(
        &self,
        endpoint: &Endpoint,
        request: &RequestDraft,
    ) -> Result<ApiResponse, DispatchError> {
        let started = Instant::now();
        let latency = self.settings.read().await.simulation.latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let reply = dispatch(&DispatchRequest::new(&endpoint.path, request))?;
        Ok(reply.into_response(started.elapsed().as_millis() as u64))
    }
}
