use crate::state::AppState;
use crate::views;
use axum::extract::State;
use axum::response::Html;

/// GET /about
pub async fn about(State(app): State<AppState>) -> Html<String> {
    Html(views::pages::about(app.config()))
}

/// GET /services
pub async fn services(State(app): State<AppState>) -> Html<String> {
    Html(views::pages::services(app.config()))
}

/// GET /contact
pub async fn contact(State(app): State<AppState>) -> Html<String> {
    Html(views::pages::contact(app.config()))
}
