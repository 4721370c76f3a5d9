//! profileweb crate entrypoint.
//!
//! Starts the Tokio runtime, initializes logging and launches the web server
//! defined in the `server` module. Keep this file minimal — most application
//! logic lives in `server`, `config`, `html` and `admin`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// HTML rendering and page generation
mod html;
/// Administrative interface mounted under /admin
mod admin;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    server::run().await
}
