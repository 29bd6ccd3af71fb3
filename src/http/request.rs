//! Request inspection helpers.

use axum::http::Method;

/// Case-insensitive POST check; `post` and `Post` are accepted as well.
pub fn is_post(method: &Method) -> bool {
    method.as_str().eq_ignore_ascii_case("POST")
}
