use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, Response};
use savvy_core::types::Section;

/// GET /savvy-hub — hub listing.
pub async fn listing(State(app): State<AppState>) -> Html<String> {
    super::render_listing(&app, Section::Hub).await
}

/// GET /savvy-hub/video/{slug} — video detail.
pub async fn video(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    super::render_detail(&app, Section::Hub, &slug).await
}
