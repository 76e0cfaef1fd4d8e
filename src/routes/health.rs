use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use crate::catalog::AREAS;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(api_health))
}

async fn api_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "properties": state.properties.len(),
        "filter_labels": AREAS.len(),
        "whatsapp_configured": !state.config.whatsapp_phone.is_empty(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HubConfig;

    #[tokio::test]
    async fn test_health_reports_catalog_size() {
        let state = Arc::new(AppState::new(HubConfig {
            bind: "127.0.0.1:0".to_string(),
            whatsapp_phone: "971500000000".to_string(),
        }));
        let res = api_health(State(state)).await;
        assert_eq!(res.0["status"], "ok");
        assert_eq!(res.0["properties"], 4);
        assert_eq!(res.0["whatsapp_configured"], true);
    }
}
