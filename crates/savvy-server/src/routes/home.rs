use crate::state::AppState;
use crate::views;
use axum::extract::State;
use axum::response::Html;
use savvy_core::section::{fetch_section, home_sections};

/// GET / — hero plus the three featured sections. Each section fetches
/// independently and concurrently; none of them can fail the page, only
/// degrade to their empty state.
pub async fn home_page(State(app): State<AppState>) -> Html<String> {
    let [lab, impact, hub] = home_sections();
    let (lab, impact, hub) = tokio::join!(
        fetch_section(app.client(), app.images(), lab),
        fetch_section(app.client(), app.images(), impact),
        fetch_section(app.client(), app.images(), hub),
    );
    Html(views::pages::home(app.config(), &[lab, impact, hub]))
}
