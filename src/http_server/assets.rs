//! Stylesheet, script and placeholder art compiled into the binary. They are
//! served under `/static` unless `--static-dir` points somewhere else.

use axum::{
    Router,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

const SITE_CSS: &str = include_str!("../../static/site.css");
const SITE_JS: &str = include_str!("../../static/site.js");
const PLACEHOLDER_SVG: &str = include_str!("../../static/placeholder.svg");

fn asset(content_type: &'static str, body: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        body,
    )
        .into_response()
}

async fn site_css() -> Response {
    asset("text/css; charset=utf-8", SITE_CSS)
}

async fn site_js() -> Response {
    asset("text/javascript; charset=utf-8", SITE_JS)
}

async fn placeholder() -> Response {
    asset("image/svg+xml", PLACEHOLDER_SVG)
}

pub fn embedded<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/static/site.css", get(site_css))
        .route("/static/site.js", get(site_js))
        .route("/static/placeholder.svg", get(placeholder))
}
