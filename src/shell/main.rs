use std::sync::Arc;

use anyhow::Context;
use code_camps::modules::camps::adapters::outbound::in_memory_store::InMemoryCampStore;
use code_camps::modules::camps::adapters::outbound::seed::sample_data;
use code_camps::shared::infrastructure::links::LinkGenerator;
use code_camps::shell::config::AppConfig;
use code_camps::shell::state::AppState;
use code_camps::shell::{graphql, http, telemetry};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store = if config.seed_sample_data {
        InMemoryCampStore::from_seed(sample_data())
    } else {
        InMemoryCampStore::new()
    };
    let state = AppState::new(Arc::new(store), LinkGenerator::default());
    let schema = graphql::schema(state.clone());

    let mut app = http::router(state)
        .merge(graphql::router(schema))
        .layer(TraceLayer::new_for_http());
    if config.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    let address = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, seeded = config.seed_sample_data, "code camps api listening");

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
