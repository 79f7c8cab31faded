//! Holds the live dashboard session
//!
//! All transitions go through the pure functions in [`crate::domain::session`];
//! this type only owns the current value and orchestrates the async send.

use crate::domain::catalog::Catalog;
use crate::domain::session::{self, Action, Outgoing, Session};
use crate::domain::{ApiResponse, BackendPort, SessionError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct SessionManager {
    catalog: Arc<Catalog>,
    backend: Arc<dyn BackendPort>,
    session: Arc<RwLock<Session>>,
}

impl SessionManager {
    pub fn new(catalog: Arc<Catalog>, backend: Arc<dyn BackendPort>) -> Self {
        Self {
            catalog,
            backend,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn apply(&self, action: Action) -> Result<Session, SessionError> {
        debug!(?action, "Applying session action");
        let mut current = self.session.write().await;
        let next = session::apply(&current, &self.catalog, action)?;
        *current = next.clone();
        Ok(next)
    }

    /// Sends the current request and waits for the reply.
    ///
    /// The lock is released while the backend works, so overlapping sends are
    /// possible; whichever completes last owns the response slot. The reply is
    /// written back by a detached task, so dropping this future mid-flight still
    /// leaves the session with a response.
    pub async fn send(&self) -> Session {
        let outgoing = {
            let mut current = self.session.write().await;
            match session::begin_send(&current) {
                Some(outgoing) => {
                    *current = outgoing.session.clone();
                    outgoing
                }
                None => {
                    debug!("Send ignored: no endpoint selected");
                    return current.clone();
                }
            }
        };

        let backend = self.backend.clone();
        let shared = self.session.clone();
        let task = tokio::spawn(async move {
            let response = exchange(backend, outgoing).await;
            let mut current = shared.write().await;
            *current = session::complete_send(&current, response);
            current.clone()
        });

        match task.await {
            Ok(session) => session,
            Err(e) => {
                error!("Send task aborted: {}", e);
                self.snapshot().await
            }
        }
    }

    /// Drop back to the initial session.
    pub async fn reset(&self) -> Session {
        let mut current = self.session.write().await;
        *current = Session::new();
        current.clone()
    }
}

/// Runs the backend call and maps every failure to the synthetic 500.
async fn exchange(backend: Arc<dyn BackendPort>, outgoing: Outgoing) -> ApiResponse {
    let started = Instant::now();
    let path = outgoing.endpoint.path.clone();
    let method = outgoing.request.method;

    // Own task so a panicking backend still resolves the send.
    let task = tokio::spawn(async move {
        backend
            .send(&outgoing.endpoint, &outgoing.request)
            .await
    });

    let response = match task.await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            error!("Request failed: {}", e);
            session::failure_response(started.elapsed().as_millis() as u64)
        }
        Err(e) => {
            error!("Request task aborted: {}", e);
            session::failure_response(started.elapsed().as_millis() as u64)
        }
    };

    info!(
        %method,
        path = %path,
        status = response.status,
        response_time = response.response_time,
        "Mock request completed"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock_backend::MockBackend;
    use crate::config::Settings;
    use crate::domain::session::Stage;
    use crate::domain::{DispatchError, Endpoint, RequestDraft};
    use std::time::Duration;
    use async_trait::async_trait;

    fn manager() -> SessionManager {
        let settings = Arc::new(RwLock::new(Settings::without_latency()));
        SessionManager::new(
            Arc::new(Catalog::seed()),
            Arc::new(MockBackend::new(settings)),
        )
    }

    struct FailingBackend;

    #[async_trait]
    impl BackendPort for FailingBackend {
        async fn send(
            &self,
            _endpoint: &Endpoint,
            _request: &RequestDraft,
        ) -> Result<ApiResponse, DispatchError> {
            Err(DispatchError::Internal("backend exploded".to_string()))
        }
    }

    struct PanickingBackend;

    #[async_trait]
    impl BackendPort for PanickingBackend {
        async fn send(
            &self,
            _endpoint: &Endpoint,
            _request: &RequestDraft,
        ) -> Result<ApiResponse, DispatchError> {
            panic!("backend panicked");
        }
    }

    #[tokio::test]
    async fn test_send_without_selection_is_noop() {
        let manager = manager();
        let session = manager.send().await;
        assert_eq!(session.stage(), Stage::NoSelection);
        assert!(session.response().is_none());
    }

    #[tokio::test]
    async fn test_send_test_case() {
        let manager = manager();
        manager
            .apply(Action::SelectTestCase { id: "3".to_string() })
            .await
            .unwrap();
        let session = manager.send().await;
        assert_eq!(session.stage(), Stage::Available);

        let response = session.response().unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body["name"], "John Doe");
        assert_eq!(response.body["id"], 4);
        assert_eq!(manager.snapshot().await, session);
    }

    #[tokio::test]
    async fn test_backend_error_becomes_500() {
        let manager = SessionManager::new(Arc::new(Catalog::seed()), Arc::new(FailingBackend));
        manager
            .apply(Action::SelectEndpoint { id: "1".to_string() })
            .await
            .unwrap();
        let session = manager.send().await;
        let response = session.response().unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(
            response.body["error"],
            "An error occurred while making the request"
        );
    }

    #[tokio::test]
    async fn test_backend_panic_becomes_500() {
        let manager = SessionManager::new(Arc::new(Catalog::seed()), Arc::new(PanickingBackend));
        manager
            .apply(Action::SelectEndpoint { id: "6".to_string() })
            .await
            .unwrap();
        let session = manager.send().await;
        assert_eq!(session.stage(), Stage::Available);
        assert_eq!(session.response().unwrap().status, 500);
    }

    #[tokio::test]
    async fn test_abandoned_send_still_completes() {
        let mut settings = Settings::without_latency();
        settings.simulation.latency_ms = 200;
        let manager = SessionManager::new(
            Arc::new(Catalog::seed()),
            Arc::new(MockBackend::new(Arc::new(RwLock::new(settings)))),
        );
        manager
            .apply(Action::SelectEndpoint { id: "6".to_string() })
            .await
            .unwrap();

        let abandoned = tokio::time::timeout(Duration::from_millis(50), manager.send()).await;
        assert!(abandoned.is_err());
        assert_eq!(manager.snapshot().await.stage(), Stage::Pending);

        tokio::time::sleep(Duration::from_millis(500)).await;
        let session = manager.snapshot().await;
        assert_eq!(session.stage(), Stage::Available);
        assert!(!session.is_loading());
        assert_eq!(session.response().unwrap().status, 200);
    }

    #[tokio::test]
    async fn test_unknown_action_target_leaves_state() {
        let manager = manager();
        let err = manager
            .apply(Action::SelectTestCase { id: "missing".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::UnknownTestCase("missing".to_string()));
        assert_eq!(manager.snapshot().await, Session::new());
    }

    #[tokio::test]
    async fn test_reset() {
        let manager = manager();
        manager
            .apply(Action::SelectEndpoint { id: "9".to_string() })
            .await
            .unwrap();
        assert_eq!(manager.reset().await, Session::new());
    }
}
