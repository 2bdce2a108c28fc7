use axum::Json;

use hyper::StatusCode;

use serde::Serialize;

// ───── Body ─────────────────────────────────────────────────────────────── //

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}
