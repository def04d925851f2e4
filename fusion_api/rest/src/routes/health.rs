use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use fusion_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    database: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { database, email } = service.get_status().await;

    let ok = database && email;

    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        database,
        email,
    };

    (status, Json(response)).into_response()
}
