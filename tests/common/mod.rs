use api_explorer::adapters::{
    health_handler::HealthHandler, mock_backend::MockBackend, session_manager::SessionManager,
};
use api_explorer::config::Settings;
use api_explorer::domain::catalog::Catalog;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new(latency_ms: u64) -> Self {
        let mut settings = Settings::without_latency();
        settings.server.port = 0;
        settings.simulation.latency_ms = latency_ms;
        let settings = Arc::new(RwLock::new(settings));

        let catalog = Arc::new(Catalog::seed());
        let backend = Arc::new(MockBackend::new(settings));
        let sessions = SessionManager::new(catalog.clone(), backend);
        let health_handler = Arc::new(HealthHandler::new(catalog));

        let app = api_explorer::create_app(sessions, health_handler);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
