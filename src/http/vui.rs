//! VUI location query/update endpoint.
//!
//! ```text
//! Received → MethodChecked → BodyParsed
//!     → QueryClassified | UpdateClassified | Unclassified
//!     → ResponseSynthesized → Sent
//! ```
//!
//! Every rejection is status-only with an empty body.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::NaiveDate;

use crate::http::request::is_post;
use crate::http::response;
use crate::vui::{parse_request, synthesize, to_xml};

/// Handle a request routed to the VUI path.
///
/// `today` becomes the `CPD` date stamp of query responses.
pub async fn handle(request: Request<Body>, body_limit: usize, today: NaiveDate) -> Response {
    let method = request.method().clone();
    tracing::debug!(method = %method, version = ?request.version(), "VUI request");

    if !is_post(&method) {
        tracing::debug!("VUI request - {} - {} not allowed", StatusCode::METHOD_NOT_ALLOWED.as_u16(), method);
        return response::empty(StatusCode::METHOD_NOT_ALLOWED);
    }

    let body = match to_bytes(request.into_body(), body_limit).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "VUI request - failed to read request body");
            return response::empty(StatusCode::BAD_REQUEST);
        }
    };

    let envelope = parse_request(&body);
    let Some(operation) = envelope.classify() else {
        tracing::debug!(
            "VUI request - {} - Failed to parse XML request body",
            StatusCode::BAD_REQUEST.as_u16()
        );
        return response::empty(StatusCode::BAD_REQUEST);
    };
    tracing::debug!(
        operation = operation.as_str(),
        external_key = %operation.external_key(),
        "VUI request classified"
    );

    match to_xml(&synthesize(operation, today)) {
        Ok(document) => response::xml(document),
        Err(e) => {
            tracing::error!(error = %e, "VUI request - {} - Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR.as_u16());
            response::empty(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Method};

    const LIMIT: usize = 64 * 1024;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    fn request(method: Method, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/vui/VuiServlet")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const QUERY: &str = "<VUI ver=\"1.0\"><Payload><ALIQueryRequest ver=\"1.0\">\
        <ExternalKey>ABC123</ExternalKey></ALIQueryRequest></Payload></VUI>";

    #[tokio::test]
    async fn test_query() {
        let resp = handle(request(Method::POST, QUERY), LIMIT, today()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/xml");

        let xml = body(resp).await;
        assert!(xml.contains("<ExternalKey>ABC123</ExternalKey>"), "{}", xml);
        assert!(xml.contains("<CPD>2025-01-02</CPD>"), "{}", xml);
    }

    #[tokio::test]
    async fn test_lowercase_post_accepted() {
        let method = Method::from_bytes(b"post").unwrap();
        let resp = handle(request(method, QUERY), LIMIT, today()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_method_is_empty_405() {
        // Body is not even XML; it must not be looked at.
        let resp = handle(request(Method::GET, "garbage"), LIMIT, today()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body(resp).await, "");
    }

    #[tokio::test]
    async fn test_unclassifiable_is_empty_400() {
        for input in ["", "<VUI/>", "<VUI><Payload/></VUI>", "{\"json\": true}"] {
            let resp = handle(request(Method::POST, input), LIMIT, today()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "input {:?}", input);
            assert_eq!(body(resp).await, "");
        }
    }

    #[tokio::test]
    async fn test_oversized_body_is_400() {
        let resp = handle(request(Method::POST, QUERY), 8, today()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
