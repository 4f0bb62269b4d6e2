//! Reader deep links.
//!
//! # Data Flow
//! ```text
//! LinkRouter match
//!     → route.rs (which ReaderRoute, which template)
//!     → action.rs (feature gate, coordinator lookup)
//!     → validation.rs (parse ids, date-shaped permalinks)
//!     → ReaderCoordinator call, or nothing
//! ```
//!
//! # Design Decisions
//! - Closed set of routes as an enum; the enum is both route and action
//! - `ReaderRoute::ALL` is the registration order; the generic permalink
//!   route is last so every specific route wins over it
//! - Invalid values never escalate: the link is simply not followed

pub mod action;
pub mod route;
pub mod validation;

pub use route::ReaderRoute;
