//! Dashboard session state and its transitions
//!
//! A [`Session`] is an immutable value. Every user action goes through [`apply`],
//! which returns the next session; sending is split into [`begin_send`] and
//! [`complete_send`] so the caller can await the simulated latency in between.

use super::catalog::Catalog;
use super::formatter::pretty_body;
use super::key_value::{HEADERS, QUERY_PARAMS};
use super::{ApiResponse, Endpoint, HttpMethod, KeyValues, RequestDraft, SessionError, TestCase};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Response slot of the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Exchange {
    #[default]
    Idle,
    Pending,
    Complete(ApiResponse),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NoSelection,
    Selected,
    Pending,
    Available,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub selected_endpoint: Option<Endpoint>,
    pub selected_test_case: Option<TestCase>,
    pub request: RequestDraft,
    pub exchange: Exchange,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        if self.selected_endpoint.is_none() {
            return Stage::NoSelection;
        }
        match self.exchange {
            Exchange::Idle => Stage::Selected,
            Exchange::Pending => Stage::Pending,
            Exchange::Complete(_) => Stage::Available,
        }
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        match &self.exchange {
            Exchange::Complete(response) => Some(response),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.exchange == Exchange::Pending
    }
}

/// User actions accepted by [`apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

pub fn apply(session: &Session, catalog: &Catalog, action: Action) -> Result<Session, SessionError> {
    let mut next = session.clone();
    match action {
        Action::SelectEndpoint { id } => {
            let endpoint = catalog
                .endpoint(&id)
                .ok_or_else(|| SessionError::UnknownEndpoint(id.clone()))?;
            let keeps_test_case = next
                .selected_test_case
                .as_ref()
                .is_some_and(|t| t.endpoint_id == endpoint.id);
            if !keeps_test_case {
                next.selected_test_case = None;
            }
            next.selected_endpoint = Some(endpoint.clone());
            next.exchange = Exchange::Idle;
        }
        Action::SelectTestCase { id } => {
            let test_case = catalog
                .test_case(&id)
                .ok_or_else(|| SessionError::UnknownTestCase(id.clone()))?;
            let endpoint = catalog
                .endpoint(&test_case.endpoint_id)
                .ok_or_else(|| SessionError::UnknownEndpoint(test_case.endpoint_id.clone()))?;
            next.selected_endpoint = Some(endpoint.clone());
            next.request = RequestDraft::from(test_case);
            next.selected_test_case = Some(test_case.clone());
            next.exchange = Exchange::Idle;
        }
        Action::ClearSelection => {
            next = Session::default();
        }
        Action::SetMethod { method } => {
            next.request.method = method;
        }
        Action::AddHeader { key, value } => {
            next.request.headers = HEADERS.add(&session.request.headers, &key, &value);
        }
        Action::RemoveHeader { key } => {
            next.request.headers = HEADERS.remove(&session.request.headers, &key);
        }
        Action::AddQueryParam { key, value } => {
            next.request.query_params =
                QUERY_PARAMS.add(&session.request.query_params, &key, &value);
        }
        Action::RemoveQueryParam { key } => {
            next.request.query_params = QUERY_PARAMS.remove(&session.request.query_params, &key);
        }
        Action::SetBody { body } => {
            next.request.body = body;
        }
        Action::FormatBody => {
            // Invalid JSON leaves the body as typed.
            if let Ok(pretty) = pretty_body(&session.request.body) {
                next.request.body = pretty;
            }
        }
    }
    Ok(next)
}

/// A send ready to be dispatched: the pending session plus what to send.
#[derive(Debug, Clone)]
pub struct Outgoing {
    pub session: Session,
    pub endpoint: Endpoint,
    pub request: RequestDraft,
}

/// Moves to `Pending`. Returns `None` when no endpoint is selected.
pub fn begin_send(session: &Session) -> Option<Outgoing> {
    let endpoint = session.selected_endpoint.clone()?;
    let mut pending = session.clone();
    pending.exchange = Exchange::Pending;
    Some(Outgoing {
        request: session.request.clone(),
        endpoint,
        session: pending,
    })
}

/// Stores `response` in the response slot. Later completions overwrite earlier ones.
pub fn complete_send(session: &Session, response: ApiResponse) -> Session {
    let mut next = session.clone();
    if next.selected_endpoint.is_some() {
        next.exchange = Exchange::Complete(response);
    }
    next
}

/// The reply shown when the backend fails unexpectedly.
pub fn failure_response(response_time: u64) -> ApiResponse {
    ApiResponse {
        status: 500,
        status_text: "Error".to_string(),
        response_time,
        body: json!({ "error": "An error occurred while making the request" }),
        headers: KeyValues::new(),
    }
}
