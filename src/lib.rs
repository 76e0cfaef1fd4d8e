//! Dubai Property Hub web server.
//!
//! A server-rendered marketing site for a Dubai real-estate agency: static
//! promotional sections, a listings page with area filtering, and an ROI
//! calculator, all driven by htmx partial swaps over a fixed in-memory
//! catalog. No persistence, no backend calls; outreach happens through
//! pre-filled WhatsApp links.

pub mod catalog;
pub mod config;
pub mod roi;
pub mod routes;
pub mod state;
pub mod templates;
pub mod whatsapp;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

    Router::new()
        .merge(routes::pages::router())
        .merge(routes::listings::router())
        .merge(routes::contact::router())
        .merge(routes::health::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("hub-web listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
