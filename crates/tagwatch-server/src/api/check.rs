use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use tagwatch_pipeline::{run_compliance_check, CheckFailure, CheckResponse};
use tracing::Instrument;

use super::AppState;
use crate::middleware::RequestId;

/// Runs a compliance check synchronously and returns its JSON result.
///
/// 200 with `{ message, missing }` on success; 500 with `{ error }` on any
/// configuration, catalog, or notification failure.
pub(super) async fn run_check(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    let span = tracing::info_span!("check", request_id = %req_id.0, trigger = "http");
    let result = run_compliance_check(&*state.env).instrument(span).await;

    match result {
        Ok(report) => (StatusCode::OK, Json(CheckResponse::for_request(&report))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(CheckFailure::from(&e)),
        )
            .into_response(),
    }
}
