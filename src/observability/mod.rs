//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Responder produces:
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```

pub mod logging;
pub mod metrics;
