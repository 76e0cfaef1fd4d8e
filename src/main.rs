use std::sync::Arc;

use hub_web::config::HubConfig;
use hub_web::{serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hub_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match HubConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind.clone();
    let state = Arc::new(AppState::new(config));
    tracing::info!(properties = state.properties.len(), "catalog seeded");

    if let Err(e) = serve(state, &addr).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
