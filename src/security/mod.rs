//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response (any route):
//!     → headers.rs (merge hardened header set)
//!     → Send to client
//! ```

pub mod headers;

pub use headers::{apply_security_headers, harden, SECURITY_HEADERS};
