//! Push request validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! method, then device token, then topic.

use crate::apns::types::{PushRequest, Rejection};
use crate::http::request::is_post;

/// True if `token` is non-empty and made only of ASCII hex digits.
///
/// The whole remainder of the path is checked, so a trailing `/` or an
/// extra path segment makes the token invalid.
pub fn is_device_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate a push request.
pub fn validate(request: &PushRequest<'_>) -> Result<(), Rejection> {
    if !is_post(request.method) {
        return Err(Rejection::MethodNotAllowed);
    }

    let valid_token = is_device_token(request.device_token);
    tracing::debug!(
        device_token = %request.device_token,
        valid = valid_token,
        "Device token checked"
    );
    if !valid_token {
        return Err(Rejection::BadDeviceToken);
    }

    let topic = request.topic();
    tracing::debug!(topic = ?topic, "APNS topic checked");
    if topic.is_none() {
        return Err(Rejection::MissingTopic);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apns::types::APNS_TOPIC;
    use axum::http::{HeaderMap, HeaderValue, Method};

    fn topic_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(APNS_TOPIC, HeaderValue::from_static("com.example.app"));
        headers
    }

    #[test]
    fn test_device_token_charset() {
        assert!(is_device_token("0123456789abcdefABCDEF"));
        assert!(is_device_token("a"));

        for bad in ["", "xyz", "abc/", "abc/def", "ab cd", "ab-cd", "é0"] {
            assert!(!is_device_token(bad), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_valid_request() {
        let headers = topic_headers();
        let method = Method::POST;
        let req = PushRequest {
            method: &method,
            device_token: "abcdef0123",
            headers: &headers,
        };
        assert_eq!(validate(&req), Ok(()));
    }

    #[test]
    fn test_method_checked_case_insensitively() {
        let headers = topic_headers();
        let lower = Method::from_bytes(b"post").unwrap();
        let req = PushRequest {
            method: &lower,
            device_token: "abcdef",
            headers: &headers,
        };
        assert_eq!(validate(&req), Ok(()));

        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let req = PushRequest {
                method: &method,
                device_token: "abcdef",
                headers: &headers,
            };
            assert_eq!(validate(&req), Err(Rejection::MethodNotAllowed));
        }
    }

    #[test]
    fn test_method_checked_before_token_and_topic() {
        let headers = HeaderMap::new();
        let method = Method::GET;
        let req = PushRequest {
            method: &method,
            device_token: "not-hex",
            headers: &headers,
        };
        assert_eq!(validate(&req), Err(Rejection::MethodNotAllowed));
    }

    #[test]
    fn test_token_checked_before_topic() {
        let headers = HeaderMap::new();
        let method = Method::POST;
        let req = PushRequest {
            method: &method,
            device_token: "",
            headers: &headers,
        };
        assert_eq!(validate(&req), Err(Rejection::BadDeviceToken));

        let req = PushRequest {
            method: &method,
            device_token: "abcdef",
            headers: &headers,
        };
        assert_eq!(validate(&req), Err(Rejection::MissingTopic));
    }
}
