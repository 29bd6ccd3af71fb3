//! APNs-style push gateway emulation.
//!
//! # Data Flow
//! ```text
//! POST <prefix>/<device-token>
//!     → types.rs (correlation id, topic lookup)
//!     → validation.rs (method → token → topic)
//!     → http::apns writes 200 or the rejection
//! ```
//!
//! Nothing is delivered or stored; a request that passes validation is
//! simply acknowledged.

pub mod types;
pub mod validation;

pub use types::{PushRequest, Rejection, APNS_ID, APNS_TOPIC};
pub use validation::{is_device_token, validate};
