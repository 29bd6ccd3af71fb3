//! VUI address-location-information protocol emulation.
//!
//! # Data Flow
//! ```text
//! request body bytes
//!     → engine::decode_body (charset from BOM / XML declaration)
//!     → engine::parse_request (best effort, empty envelope on failure)
//!     → VuiRequest::classify → Operation::{Query, Update} | None
//!     → engine::synthesize (canned template + date stamp)
//!     → engine::to_xml
//! ```
//!
//! # Design Decisions
//! - The response arm is an enum, the wire payload is only built from it
//! - Synthesis is a pure function of the request and the date
//! - No state survives a request

pub mod engine;
pub mod schema;

pub use engine::{parse_request, synthesize, to_xml, Operation, VuiError};
pub use schema::{ResponseBody, VuiRequest, VuiResponse};
