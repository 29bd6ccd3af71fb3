//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → router.rs (route lookup)
//!     → matcher.rs (prefix / exact path match)
//!     → Return: RouteMatch { protocol, remainder }
//!
//! Route Compilation (at startup):
//!     RoutesConfig
//!     → Sort by prefix length
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - Unmatched paths resolve to the index route, never to an error

pub mod matcher;
pub mod router;

pub use router::{Protocol, RouteMatch, Router};
