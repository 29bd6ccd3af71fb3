//! Push gateway request types and rejection reasons.

use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use uuid::Uuid;

/// Correlation id header, echoed or generated on every response.
pub const APNS_ID: &str = "apns-id";

/// Routing key header identifying the target application.
pub const APNS_TOPIC: &str = "apns-topic";

/// Why a push request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Method other than POST.
    MethodNotAllowed,
    /// Device token empty or not hexadecimal.
    BadDeviceToken,
    /// `apns-topic` absent or empty.
    MissingTopic,
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Rejection::BadDeviceToken | Rejection::MissingTopic => StatusCode::BAD_REQUEST,
        }
    }

    /// Reason token written as the response body.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::MethodNotAllowed => "MethodNotAllowed",
            Rejection::BadDeviceToken => "BadDeviceToken",
            Rejection::MissingTopic => "MissingTopic",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// The parts of an inbound request the push gateway looks at.
#[derive(Debug)]
pub struct PushRequest<'a> {
    pub method: &'a Method,
    pub device_token: &'a str,
    pub headers: &'a HeaderMap,
}

impl<'a> PushRequest<'a> {
    /// Inbound `apns-id` if present and non-empty, otherwise a fresh UUID v4.
    pub fn correlation_id(&self) -> HeaderValue {
        match self.headers.get(APNS_ID) {
            Some(value) if !value.is_empty() => value.clone(),
            // Hyphenated UUIDs are plain ASCII, the fallback is unreachable.
            _ => HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("00000000-0000-4000-8000-000000000000")),
        }
    }

    /// Non-empty `apns-topic` header value.
    ///
    /// Opaque bytes: obs-text values count as present.
    pub fn topic(&self) -> Option<&'a HeaderValue> {
        self.headers.get(APNS_TOPIC).filter(|v| !v.is_empty())
    }
}
