pub mod health;
pub mod home;
pub mod hub;
pub mod impact;
pub mod lab;
pub mod pages;

use crate::error::AppError;
use crate::state::AppState;
use crate::views;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use savvy_core::query::Query;
use savvy_core::section::{fetch_section, listing_spec};
use savvy_core::slug::validate_slug;
use savvy_core::types::Section;

/// Shared listing handler body: fetch the section's full page of documents
/// and render grid or empty state.
pub(crate) async fn render_listing(app: &AppState, section: Section) -> Html<String> {
    let data = fetch_section(app.client(), app.images(), listing_spec(section)).await;
    Html(views::pages::listing(app.config(), &data))
}

/// Shared detail handler body: look one document up by slug and render it,
/// or the section's not-found fragment with a real 404. A fetch failure is
/// logged and then indistinguishable from a missing document, which is the
/// coarse taxonomy this site wants.
pub(crate) async fn render_detail(
    app: &AppState,
    section: Section,
    slug: &str,
) -> Result<Response, AppError> {
    validate_slug(slug)?;

    let query = Query::new(section.content_type()).by_slug(slug);
    let doc = match app.client().fetch_first(&query).await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!(section = %section, slug, error = %e, "detail fetch failed");
            None
        }
    };

    match doc {
        Some(doc) => Ok(Html(views::pages::document_detail(
            app.config(),
            section,
            &doc,
            app.images(),
        ))
        .into_response()),
        None => Ok(not_found_response(app, section)),
    }
}

pub(crate) fn not_found_response(app: &AppState, section: Section) -> Response {
    let body = views::layout(app.config(), "Not Found", &views::not_found(Some(section)));
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}
