//! HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → responder.rs (method check, health route, asset lookup, 404 page)
//!     → response.rs (synthesized bodies)
//!     → security::harden (once, on the way out)
//!     → Send to client
//! ```

pub mod responder;
pub mod response;
pub mod server;

pub use responder::{allowed_method, Outcome, Responder};
pub use server::HttpServer;
