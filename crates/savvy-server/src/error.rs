use crate::views;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use savvy_core::SavvyError;

/// Unified error type for page handlers. Most content problems never reach
/// this (a failed section fetch degrades to the empty state inside the
/// handler), so what lands here is routing-level: bad slugs, unreadable
/// page manifests, and genuine bugs.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<SavvyError>() {
            match e {
                SavvyError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
                SavvyError::InvalidSlug(_)
                | SavvyError::UnknownContentType(_)
                | SavvyError::UnknownSection(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Html(views::error_page(status))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
