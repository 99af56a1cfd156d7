use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, Response};
use savvy_core::types::Section;

/// GET /savvy-impact — impact case listing.
pub async fn listing(State(app): State<AppState>) -> Html<String> {
    super::render_listing(&app, Section::Impact).await
}

/// GET /savvy-impact/project/{slug} — case detail.
pub async fn project(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    super::render_detail(&app, Section::Impact, &slug).await
}
