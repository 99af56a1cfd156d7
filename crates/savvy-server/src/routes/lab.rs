use crate::error::AppError;
use crate::state::AppState;
use crate::views;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use savvy_core::scaffold::PageManifest;
use savvy_core::slug::validate_slug;
use savvy_core::types::Section;

/// GET /savvy-lab — full lab listing.
pub async fn listing(State(app): State<AppState>) -> Html<String> {
    super::render_listing(&app, Section::Lab).await
}

/// GET /savvy-lab/project/{slug} — project detail. A checked-in page
/// manifest wins over the CMS document when both exist.
pub async fn project(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    validate_slug(&slug)?;

    if let Some(manifest) = PageManifest::load(app.root(), &slug)? {
        return Ok(Html(views::pages::manifest_detail(app.config(), &manifest)).into_response());
    }

    super::render_detail(&app, Section::Lab, &slug).await
}
