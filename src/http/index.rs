//! Default handler for paths no protocol claims.

use axum::http::StatusCode;
use axum::response::Response;

use crate::http::response;

pub const WELCOME: &str = "Welcome to DEG.";

pub fn handle() -> Response {
    response::text(StatusCode::OK, WELCOME)
}
