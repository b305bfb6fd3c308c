//! Development server for dashboard UI development
//!
//! This binary runs the mock bot API with fixture data for frontend
//! development. Point the Trunk dev server at it with BACKEND_URL.
//!
//! Usage: cargo run -p dev-server
//!
//! Set PORT in the environment (or a .env file) to bind a fixed port
//! instead of an OS-assigned one.

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if available
    let _ = dotenvy::dotenv();

    let subscriber = test_helpers::telemetry::get_subscriber("info".into());
    test_helpers::telemetry::init_subscriber(subscriber);

    info!("🚀 Starting dashboard development server");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(0);
    let app = test_helpers::spawn_app_on_port(port).await;

    info!("✅ Mock API running on http://127.0.0.1:{}", app.port);
    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!(
        "   Log in from the browser console: \
         localStorage.setItem('discord_access_token', '{}')",
        test_helpers::mock::ACCESS_TOKEN
    );
    info!("");
    test_helpers::mock::print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
