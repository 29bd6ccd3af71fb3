//! Response construction shared by the protocol handlers.
//!
//! # Responsibilities
//! - Build status-only responses
//! - Attach protocol content types (JSON error tokens, XML documents)
//!
//! # Design Decisions
//! - Bodies are fully built before the response is returned (no streaming)
//! - Handlers never write partial responses

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_XML: &str = "text/xml";

/// Status code with an empty body.
pub fn empty(status: StatusCode) -> Response {
    (status, Body::empty()).into_response()
}

/// Plain text body.
pub fn text(status: StatusCode, body: &'static str) -> Response {
    (status, body).into_response()
}

/// Error token body labelled as JSON, the way the push gateway replies.
pub fn json_error(status: StatusCode, reason: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
        reason,
    )
        .into_response()
}

/// 200 with an XML document.
pub fn xml(document: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_XML))],
        document,
    )
        .into_response()
}
