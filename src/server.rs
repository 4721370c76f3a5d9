//! Web server module for profileweb.
//!
//! Provides the HTTP surface: the profile page at `/`, rendered with the
//! Vapi credentials taken from configuration, and the administrative
//! interface delegated to the `admin` module under `/admin`.
//!
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::{admin, config::Config, html::render_profile};

/// Application state shared with every handler
pub struct AppState {
    /// Startup configuration, read-only for the life of the process
    pub config: Config,
}

/// Build the application router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(profile_page))
        .merge(admin::router())
        .with_state(state)
}

/// Start the web server
pub async fn run() -> std::io::Result<()> {
    let state = Arc::new(AppState {
        config: Config::from_env(),
    });

    if state.config.assistant_id.is_none() || state.config.api_key.is_none() {
        tracing::warn!(
            "VAPI_ASSISTANT_ID / VAPI_API_KEY not fully configured, GET / will answer 500"
        );
    }

    let addr = format!("0.0.0.0:{}", state.config.web_port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("profile page served at http://{addr}/");

    axum::serve(listener, router(state)).await
}

/// Render the profile page with the configured Vapi credentials
async fn profile_page(State(state): State<Arc<AppState>>) -> Response {
    match (&state.config.assistant_id, &state.config.api_key) {
        (Some(assistant_id), Some(api_key)) => {
            Html(render_profile(assistant_id, api_key)).into_response()
        }
        _ => {
            tracing::error!("vapi configuration incomplete, refusing to render profile page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
