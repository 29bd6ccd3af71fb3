//! Push gateway endpoint.

use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;

use crate::apns::{validate, PushRequest, APNS_ID};
use crate::http::response;

/// Handle a request routed to the push prefix.
///
/// `device_token` is everything in the path after the prefix. The `apns-id`
/// header is attached to every outcome, rejections included.
pub fn handle(method: &Method, device_token: &str, headers: &HeaderMap) -> Response {
    let request = PushRequest {
        method,
        device_token,
        headers,
    };
    let apns_id = request.correlation_id();
    tracing::debug!(method = %method, apns_id = ?apns_id, "APNS request");

    let mut response = match validate(&request) {
        Ok(()) => response::empty(StatusCode::OK),
        Err(rejection) => {
            tracing::info!("{} - {}", rejection.status().as_u16(), rejection);
            response::json_error(rejection.status(), rejection.reason())
        }
    };

    response.headers_mut().insert(APNS_ID, apns_id);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apns::APNS_TOPIC;
    use axum::body::to_bytes;
    use axum::http::{header, HeaderValue};

    const TOKEN: &str = "00fc13adff785122b4ad28809a3420982341241421348097878e577c991de8f0";

    fn headers(apns_id: Option<&'static str>, topic: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(id) = apns_id {
            headers.insert(APNS_ID, HeaderValue::from_static(id));
        }
        if let Some(topic) = topic {
            headers.insert(APNS_TOPIC, HeaderValue::from_static(topic));
        }
        headers
    }

    async fn body(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_accepted() {
        let resp = handle(&Method::POST, TOKEN, &headers(Some("id-1"), Some("com.example")));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[APNS_ID], "id-1");
        assert!(resp.headers().get(header::CONTENT_TYPE).is_none());
        assert_eq!(body(resp).await, "");
    }

    #[tokio::test]
    async fn test_rejections_carry_apns_id_and_json_type() {
        let cases = [
            (Method::GET, TOKEN, Some("com.example"), StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed"),
            (Method::POST, "zz", Some("com.example"), StatusCode::BAD_REQUEST, "BadDeviceToken"),
            (Method::POST, "", Some("com.example"), StatusCode::BAD_REQUEST, "BadDeviceToken"),
            (Method::POST, TOKEN, None, StatusCode::BAD_REQUEST, "MissingTopic"),
        ];

        for (method, token, topic, status, reason) in cases {
            let resp = handle(&method, token, &headers(Some("id-2"), topic));
            assert_eq!(resp.status(), status);
            assert_eq!(resp.headers()[APNS_ID], "id-2");
            assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
            assert_eq!(body(resp).await, reason);
        }
    }

    #[tokio::test]
    async fn test_non_ascii_topic_accepted() {
        let mut headers = headers(Some("id-3"), None);
        headers.insert(APNS_TOPIC, HeaderValue::from_bytes(b"com.\xe9xample").unwrap());

        let resp = handle(&Method::POST, TOKEN, &headers);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[APNS_ID], "id-3");
        assert_eq!(body(resp).await, "");
    }

    #[tokio::test]
    async fn test_generated_apns_id_on_rejection() {
        let resp = handle(&Method::DELETE, TOKEN, &headers(None, None));
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let id = resp.headers()[APNS_ID].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
