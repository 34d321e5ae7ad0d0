//! Embedded HTML pages: the student form and the admin dashboard.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const ADMIN_HTML: &str = include_str!("../assets/admin.html");

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/admin", get(admin))
        .route("/admin.html", get(admin))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn admin() -> Html<&'static str> {
    Html(ADMIN_HTML)
}
