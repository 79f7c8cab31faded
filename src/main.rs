use api_explorer::adapters::health_handler::HealthHandler;
use api_explorer::adapters::mock_backend::MockBackend;
use api_explorer::adapters::session_manager::SessionManager;
use api_explorer::cli::Cli;
use api_explorer::config::{watcher::ConfigWatcher, Settings};
use api_explorer::domain::catalog::Catalog;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("api_explorer=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (file, then env and CLI overrides)
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!(
        latency_ms = settings.simulation.latency_ms,
        "Starting API Explorer on {}:{}", host, port
    );

    // Wrap settings in Arc<RwLock> for live reload
    let settings = Arc::new(RwLock::new(settings));

    let _watcher = if cli.no_watch {
        None
    } else {
        let settings_for_watcher = settings.clone();
        let reload_cli = cli.clone();
        let watcher = ConfigWatcher::new(&cli.config, move || {
            match Settings::new_with_cli(&reload_cli) {
                Ok(new_settings) => {
                    let mut w = settings_for_watcher.blocking_write();
                    if w.server != new_settings.server {
                        info!("Server address changes take effect after a restart");
                    }
                    *w = new_settings;
                    info!(
                        latency_ms = w.simulation.latency_ms,
                        "Configuration reloaded successfully"
                    );
                }
                Err(e) => error!("Failed to reload configuration: {}", e),
            }
        })?;
        Some(watcher)
    };

    let catalog = Arc::new(Catalog::seed());
    let backend = Arc::new(MockBackend::new(settings.clone()));
    let sessions = SessionManager::new(catalog.clone(), backend);
    let health_handler = Arc::new(HealthHandler::new(catalog));

    let app = api_explorer::create_app(sessions, health_handler);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
