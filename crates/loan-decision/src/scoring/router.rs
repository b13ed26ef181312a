use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::LoanApplication;
use super::service::{DecisionError, DecisionService};

/// Router builder exposing the prediction endpoint and the liveness banner.
pub fn decision_router(service: Arc<DecisionService>) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/", get(root_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<DecisionService>>,
    Json(application): Json<LoanApplication>,
) -> Response {
    match service.decide(&application) {
        Ok(decision) => (StatusCode::OK, Json(decision)).into_response(),
        Err(error @ DecisionError::Unavailable(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Loan decision service is running. POST an application to /predict."
    }))
}
