//! Pricing Dashboard Server Binary
//!
//! Run with: `cargo run --bin pricing-dashboard`

use pricing_dashboard::{run_server, DashboardConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Note: Tracing is initialized in run_server()
    // Set RUST_LOG environment variable to control log level:
    //   RUST_LOG=debug cargo run --bin pricing-dashboard

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);
    let dashboard = DashboardConfig::from_env()?;

    let config = ServerConfig::new(host, port, dashboard);

    println!("📊 Starting Pricing Dashboard...");
    println!("   Host: {}", config.host);
    println!("   Port: {}", config.port);
    println!("   Data: {}", config.dashboard.source.path().display());
    println!("   Cutoff: {}", config.dashboard.cutoff);
    println!(
        "   Peak days: {}",
        config.dashboard.peak_days.describe(config.dashboard.locale)
    );
    println!();
    println!(
        "Dashboard will be available at: http://{}:{}",
        config.host, config.port
    );
    println!();
    println!("Available endpoints:");
    println!("  GET  /                     - Dashboard page");
    println!("  GET  /health               - Health check");
    println!("  GET  /dashboard            - Cards and charts (?start=&end=)");
    println!("  GET  /dashboard/range      - Check-in date bounds");
    println!("  GET  /metrics              - Metric cards (?start=&end=)");
    println!("  GET  /charts/:id           - Single chart (?start=&end=)");
    println!("  GET  /reservations         - Prepared rows (?start=&end=)");
    println!();

    run_server(config).await?;

    Ok(())
}
