use std::net::{Ipv4Addr, SocketAddr};

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use crate::{
    app_state::AppState,
    error::AppError,
    routes::status::{not_found, status},
};

/// Builds the router. The method-level fallback keeps `POST /api/status`
/// (and every other non-GET method) on the same 404 path as unknown routes.
/// No trace middleware is installed: requests are not logged.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

/// Binds on all interfaces. A port already in use surfaces here; the caller
/// treats that as fatal.
pub async fn bind(port: u16) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { port, source })
}

/// Runs the accept loop until the process terminates.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}
