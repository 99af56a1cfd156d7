use crate::state::AppState;
use crate::views;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/"]
struct SiteAssets;

/// Fallback handler: serve embedded assets under `/assets/*`, render the
/// not-found page for everything else. Unlike an SPA there is no index
/// fallback; unknown paths are a real 404.
pub async fn static_handler(State(app): State<AppState>, uri: Uri) -> Response {
    if let Some(path) = uri.path().strip_prefix("/assets/") {
        if let Some(content) = <SiteAssets as Embed>::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    (
                        header::CACHE_CONTROL,
                        "public, max-age=86400".to_string(),
                    ),
                ],
                content.data.to_vec(),
            )
                .into_response();
        }
    }

    let body = views::layout(app.config(), "Not Found", &views::not_found(None));
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}
