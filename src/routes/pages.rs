use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::routes::is_htmx;
use crate::state::AppState;
use crate::templates;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/locations", get(locations))
        .route("/about", get(about))
}

async fn home(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let content = templates::home_page(&state.properties, &state.config.whatsapp_phone);
    page_or_fragment(&headers, "Home", &content, &state)
}

async fn locations(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    page_or_fragment(&headers, "Locations", &templates::locations_page(), &state)
}

async fn about(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    page_or_fragment(&headers, "About", &templates::about_page(), &state)
}

/// Bare fragment for htmx swaps, full shell for direct URL access.
pub fn page_or_fragment(
    headers: &HeaderMap,
    title: &str,
    content: &str,
    state: &AppState,
) -> Html<String> {
    if is_htmx(headers) {
        Html(content.to_string())
    } else {
        Html(templates::wrap_page(title, content, &state.config.whatsapp_phone))
    }
}
