mod check;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tagwatch_pipeline::EnvLookup;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    /// Source of check configuration, read afresh on every run.
    pub env: EnvLookup,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route(
            "/api/v1/check",
            get(check::run_check).post(check::run_check),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
