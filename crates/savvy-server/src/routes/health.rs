use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::LazyLock;
use std::time::Instant;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// GET /health — liveness for the reverse proxy.
pub async fn health() -> impl IntoResponse {
    let body = serde_json::json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": START_TIME.elapsed().as_secs(),
    });
    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}
