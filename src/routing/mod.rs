//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound link (scheme, host, path)
//!     → matcher.rs (scheme and host accepted?)
//!     → router.rs (route lookup, in declaration order)
//!     → pattern.rs (segment-by-segment match, placeholder bindings)
//!     → values.rs (bindings + original URL)
//!     → route.rs (the route's NavigationAction runs)
//!     → Return: dispatched route name or NoRoute
//!
//! Route Compilation (at startup):
//!     Route[] in declaration order
//!     → Parse templates into PathPatterns
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex; patterns are literal or placeholder segments
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)
//! - The matcher never type-checks values; actions do

pub mod matcher;
pub mod pattern;
pub mod route;
pub mod router;
pub mod values;

pub use pattern::PathPattern;
pub use route::{DeepLinkSection, NavigationAction, Route};
pub use router::{LinkRouter, LinkRouterBuilder, RouteMatch, RouteTable};
pub use values::MatchedValues;
