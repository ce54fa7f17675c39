use axum::response::Html;

/// GET /
/// Serves the embedded single-page editor.
pub async fn editor_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
