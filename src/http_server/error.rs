use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::http_server::views;

/// Outcomes a page handler can end in besides a rendered page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (title, message) = match &self {
            PageError::NotFound => ("Not Found", "The page you are looking for does not exist."),
            PageError::Internal(detail) => {
                tracing::error!(detail, "Page failed to render");
                ("Error", "Something went wrong.")
            }
        };

        let body = format!(
            r#"<div class="body-container__right"><div class="error-page"><h1>{}</h1><p>{message}</p><a href="/" class="button-text view-all">Back home</a></div></div>"#,
            self.status().as_u16()
        );
        (self.status(), Html(views::layout(title, "", "", &body))).into_response()
    }
}
