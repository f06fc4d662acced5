//! HTTP request handlers

mod create;
mod get;

pub use create::CreateHandler;
pub use get::GetHandler;

use axum::http::StatusCode;
use orbit_http_core::OrbitHttpError;

/// Map an error to the response status code
pub(crate) fn status_for(err: &OrbitHttpError) -> StatusCode {
    match err.status_code() {
        404 => StatusCode::NOT_FOUND,
        400 => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
