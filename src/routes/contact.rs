use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::routes::pages::page_or_fragment;
use crate::state::AppState;
use crate::templates;
use crate::whatsapp;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", get(contact_page).post(contact_submit))
}

async fn contact_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    page_or_fragment(&headers, "Contact", &templates::contact_page(), &state)
}

#[derive(Deserialize)]
struct ContactInput {
    name: Option<String>,
    message: Option<String>,
}

/// Turn the submitted fields into a pre-filled wa.me link and send the
/// browser there. Fire-and-forget: nothing is stored and no reply is read.
async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Form(input): Form<ContactInput>,
) -> Redirect {
    let name = input.name.unwrap_or_default();
    let message = input.message.unwrap_or_default();
    let text = whatsapp::contact_message(&name, &message);
    tracing::info!(name = %name, "contact form submitted, handing off to WhatsApp");
    Redirect::to(&whatsapp::wa_link(&state.config.whatsapp_phone, &text))
}
