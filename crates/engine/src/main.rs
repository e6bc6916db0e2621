//! Sheetsmith Engine - Main entry point.
//!
//! Composition root: wires the in-memory sheet repository to the use cases
//! and starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;
mod use_cases;

use app::App;
use infrastructure::memory::InMemorySheetRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetsmith_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sheetsmith Engine");

    // Load configuration
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Create application
    let sheets = Arc::new(InMemorySheetRepo::seeded());
    let app = Arc::new(App::new(sheets));

    // Single-user local tool; the editor UI is served from another origin in dev
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api::http::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app);

    let addr: SocketAddr = format!("{}:{}", server_host, server_port).parse()?;
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
