//! REST API server for the pricing dashboard

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

use crate::config::DashboardConfig;
use crate::pipeline::load_and_prepare;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where the dashboard listens and what it serves
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, "127.0.0.1" unless `HOST` is set
    pub host: String,
    /// Bind port, 3000 unless `PORT` is set
    pub port: u16,
    /// What to load and how to present it
    pub dashboard: DashboardConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            dashboard: DashboardConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, dashboard: DashboardConfig) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            dashboard,
        }
    }
}

/// Installs the global tracing subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Prepares the reservation table and serves the dashboard until shutdown.
///
/// The table is built once before binding; a source or preparation error
/// aborts start-up instead of serving an empty dashboard.
///
/// # Example
/// ```rust,no_run
/// use pricing_dashboard::server::{run_server, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ServerConfig::default();
///     run_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Load and prepare the reservation table
    let source = config.dashboard.source.open()?;
    let table = load_and_prepare(source.as_ref(), &config.dashboard.peak_days)?;

    if let Some(range) = table.check_in_range() {
        tracing::info!(
            from = %range.start,
            to = %range.end,
            cutoff = %config.dashboard.cutoff,
            "check-in range loaded"
        );
    }

    let state = Arc::new(AppState::new(table, config.dashboard));

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
