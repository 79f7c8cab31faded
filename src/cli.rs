use clap::Parser;
use std::path::PathBuf;

/// API Explorer - mock API testing dashboard with a simulated backend
#[derive(Parser, Debug, Clone)]
#[command(name = "api-explorer", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "API_EXPLORER_CONFIG", default_value = "api-explorer.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "API_EXPLORER_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "API_EXPLORER_PORT")]
    pub port: Option<u16>,

    /// Simulated backend latency in milliseconds
    #[arg(long, env = "API_EXPLORER_LATENCY_MS")]
    pub latency_ms: Option<u64>,

    /// Do not reload the configuration file when it changes
    #[arg(long, env = "API_EXPLORER_NO_WATCH")]
    pub no_watch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["api-explorer"]);
        assert_eq!(cli.config, PathBuf::from("api-explorer.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.latency_ms.is_none());
        assert!(!cli.no_watch);
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "api-explorer",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--latency-ms",
            "250",
            "--no-watch",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.latency_ms, Some(250));
        assert!(cli.no_watch);
    }
}
