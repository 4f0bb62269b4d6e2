//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LinkRouter dispatch:
//!     → tracing span `link_dispatch` (link_id, route, source)
//!     → logging.rs (structured log events, installed by the binary)
//!     → metrics.rs (dispatch and rejection counters)
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing a subscriber or recorder is up to
//!   the host
//! - Every dispatch gets a UUID so its log lines can be correlated
//! - Metrics are cheap (no-ops without a recorder)

pub mod logging;
pub mod metrics;
