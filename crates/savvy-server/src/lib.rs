pub mod assets;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

use axum::routing::get;
use axum::Router;
use savvy_core::config::SiteConfig;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all page routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: SiteConfig, root: PathBuf) -> Router {
    let app_state = state::AppState::new(config, root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home::home_page))
        .route("/about", get(routes::pages::about))
        .route("/services", get(routes::pages::services))
        .route("/contact", get(routes::pages::contact))
        // Savvy Lab
        .route("/savvy-lab", get(routes::lab::listing))
        .route("/savvy-lab/project/{slug}", get(routes::lab::project))
        // Savvy Hub
        .route("/savvy-hub", get(routes::hub::listing))
        .route("/savvy-hub/video/{slug}", get(routes::hub::video))
        // Savvy Impact
        .route("/savvy-impact", get(routes::impact::listing))
        .route("/savvy-impact/project/{slug}", get(routes::impact::project))
        // System
        .route("/health", get(routes::health::health))
        .fallback(assets::static_handler)
        .layer(cors)
        .with_state(app_state)
}

/// Start the site server.
pub async fn serve(
    config: SiteConfig,
    root: PathBuf,
    port: u16,
    open_browser: bool,
) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, root, listener, open_browser).await
}

/// Start the site server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so
/// the caller can read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port).
pub async fn serve_on(
    config: SiteConfig,
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(config, root);

    tracing::info!("site listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
