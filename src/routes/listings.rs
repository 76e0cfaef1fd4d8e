use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::{filter_properties, FilterState};
use crate::roi::{self, CalculatorState};
use crate::routes::pages::page_or_fragment;
use crate::state::AppState;
use crate::templates;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/listings", get(listings_page))
        .route("/partials/listings", get(partial_listings))
        .route("/partials/roi", get(partial_roi))
        .route("/api/listings", get(api_listings))
}

#[derive(Deserialize)]
struct FilterQuery {
    area: Option<String>,
}

impl FilterQuery {
    fn filter(&self) -> FilterState {
        let initial = FilterState::new();
        match self.area.as_deref() {
            Some(area) => initial.select(area),
            None => initial,
        }
    }
}

async fn listings_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Query(q): Query<FilterQuery>,
) -> impl IntoResponse {
    let content = templates::listings_page(
        &q.filter(),
        &state.properties,
        &state.config.whatsapp_phone,
    );
    page_or_fragment(&headers, "Listings", &content, &state)
}

/// Re-derive the filter bar and grid for an htmx swap.
async fn partial_listings(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FilterQuery>,
) -> impl IntoResponse {
    Html(templates::listing_panel(
        &q.filter(),
        &state.properties,
        &state.config.whatsapp_phone,
    ))
}

#[derive(Deserialize)]
struct RoiQuery {
    price: Option<String>,
    rent: Option<String>,
}

/// Re-derive the displayed percentage for an htmx swap. Raw text goes
/// through the explicit parse step, so unparsable input computes as zero.
async fn partial_roi(Query(q): Query<RoiQuery>) -> impl IntoResponse {
    let calc = CalculatorState::default()
        .set_price(roi::parse_amount(q.price.as_deref().unwrap_or("")))
        .set_rent(roi::parse_amount(q.rent.as_deref().unwrap_or("")));
    Html(templates::roi_result(roi::compute_roi(&calc)))
}

async fn api_listings(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FilterQuery>,
) -> Json<Value> {
    let selection = q.area.as_deref().unwrap_or(crate::catalog::ALL_AREAS);
    let results = filter_properties(&state.properties, selection);
    Json(json!({
        "area": selection,
        "count": results.len(),
        "results": results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HubConfig;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(HubConfig {
            bind: "127.0.0.1:0".to_string(),
            whatsapp_phone: "971500000000".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_api_listings_filters_by_area() {
        let res = api_listings(
            State(test_state()),
            Query(FilterQuery {
                area: Some("Business Bay".to_string()),
            }),
        )
        .await;
        assert_eq!(res.0["count"], 1);
        assert_eq!(res.0["results"][0]["title"], "Business Bay Investor Unit");
        assert_eq!(res.0["results"][0]["type"], "Investor");
    }

    #[tokio::test]
    async fn test_api_listings_defaults_to_all() {
        let res = api_listings(State(test_state()), Query(FilterQuery { area: None })).await;
        assert_eq!(res.0["area"], "All");
        assert_eq!(res.0["count"], 4);
    }

    #[tokio::test]
    async fn test_api_listings_unknown_area_is_empty() {
        let res = api_listings(
            State(test_state()),
            Query(FilterQuery {
                area: Some("Atlantis".to_string()),
            }),
        )
        .await;
        assert_eq!(res.0["count"], 0);
    }
}
