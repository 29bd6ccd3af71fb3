//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the registered protocol routes
//! - Resolve a request path to exactly one route
//! - Fall back to the index route when nothing matches
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Longest matching prefix wins, so registration order is irrelevant
//! - Resolution never fails

use crate::config::RoutesConfig;
use crate::routing::matcher::PathPrefixMatcher;

/// The emulated protocols a request can be dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// APNs-style push-notification gateway.
    Apns,
    /// VUI address-location-information XML endpoint.
    Vui,
    /// Welcome page for anything else.
    Index,
}

impl Protocol {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Apns => "apns",
            Protocol::Vui => "vui",
            Protocol::Index => "index",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub protocol: Protocol,
    /// Path left over after the matched prefix (the device token for APNs).
    pub remainder: &'a str,
}

/// A registered (prefix → protocol) pair.
#[derive(Debug, Clone)]
struct Route {
    matcher: PathPrefixMatcher,
    protocol: Protocol,
}

/// Static routing table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build the routing table from configuration.
    pub fn from_config(config: &RoutesConfig) -> Self {
        Self::new([
            (config.apns_prefix.as_str(), Protocol::Apns),
            (config.vui_path.as_str(), Protocol::Vui),
        ])
    }

    /// Build a routing table from explicit (prefix, protocol) pairs.
    pub fn new<'a>(routes: impl IntoIterator<Item = (&'a str, Protocol)>) -> Self {
        let mut routes: Vec<Route> = routes
            .into_iter()
            .map(|(prefix, protocol)| Route {
                matcher: PathPrefixMatcher::new(prefix),
                protocol,
            })
            .collect();

        // Longest prefix first
        routes.sort_by(|a, b| b.matcher.prefix().len().cmp(&a.matcher.prefix().len()));

        tracing::debug!(
            routes = ?routes.iter().map(|r| (r.matcher.prefix(), r.protocol.as_str())).collect::<Vec<_>>(),
            "Routing table built"
        );

        Self { routes }
    }

    /// Resolve a request path to a route. Unmatched paths go to [`Protocol::Index`].
    pub fn resolve<'a>(&self, path: &'a str) -> RouteMatch<'a> {
        self.routes
            .iter()
            .find_map(|route| {
                route.matcher.remainder(path).map(|remainder| RouteMatch {
                    protocol: route.protocol,
                    remainder,
                })
            })
            .unwrap_or(RouteMatch {
                protocol: Protocol::Index,
                remainder: path,
            })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::from_config(&RoutesConfig::default())
    }
}
