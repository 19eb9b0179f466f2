//! Response builders shared by the controllers.

use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

/// Renders a JSON response.
pub fn json<T: Serialize>(body: T) -> Response {
    axum::Json(body).into_response()
}

/// Renders a plain-text response.
pub fn text(body: String) -> Response {
    body.into_response()
}

/// Renders a static HTML page.
pub fn html(body: &'static str) -> Response {
    Html(body).into_response()
}
