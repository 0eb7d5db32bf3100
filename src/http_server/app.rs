use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{Router, response::IntoResponse, response::Response, routing::get};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http_server::{assets, error::PageError, pages, state::AppState};

pub struct HttpServerConfig {
    pub port: u16,
    pub state: AppState,
    /// Served under `/static` when set, replacing the embedded assets.
    pub static_dir: Option<PathBuf>,
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    PageError::Internal(detail.to_string()).into_response()
}

pub fn router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/music", get(pages::music))
        .route("/albums/{slug}", get(pages::album))
        .fallback(pages::not_found);

    router = match static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router.merge(assets::embedded()),
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

pub async fn start(config: HttpServerConfig) -> color_eyre::Result<()> {
    let HttpServerConfig {
        port,
        state,
        static_dir,
    } = config;

    let app = router(Arc::new(state), static_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    tracing::info!(port, "HTTP server listening");

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
