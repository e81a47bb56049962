use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shikayat_core::Error;
use tracing::{debug, error};

use crate::views;

/// Wrapper that turns core errors into HTTP responses. Validation never
/// reaches this point (handlers recover it as a redirect); everything
/// else is either a 404 or a generic 500.
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound(what) => {
                debug!("Not found: {what}");
                (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
            }
            other => {
                error!("Request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page()))
                    .into_response()
            }
        }
    }
}
