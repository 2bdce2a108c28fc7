use axum::extract::State;
use axum::Json;

use hyper::StatusCode;

use serde::Serialize;

// ───── Current Crate Imports ────────────────────────────────────────────── //

use crate::startup::AppState;

// ───── Body ─────────────────────────────────────────────────────────────── //

/// Greeting payload. `Hello` is spelled capitalized on the wire and is
/// always serialized before `package_manager`.
#[derive(Serialize)]
pub struct IndexResponse {
    #[serde(rename = "Hello")]
    hello: &'static str,
    package_manager: &'static str,
}

pub async fn index(
    State(state): State<AppState>,
) -> (StatusCode, Json<IndexResponse>) {
    (
        StatusCode::OK,
        Json(IndexResponse {
            hello: "World",
            package_manager: state.package_manager.as_str(),
        }),
    )
}
