use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
    timestamp: f64,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        timestamp: (state.clock)(),
    })
}

/// Built by hand rather than via `IntoResponse` for `&str` so the 404 carries
/// no `Content-Type` header, matching the wire contract.
pub async fn not_found() -> Response {
    let mut res = Response::new(Body::from("Not found"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}
