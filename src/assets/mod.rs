//! Asset resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Request (GET/HEAD, not the health route)
//!     → AssetResolver::resolve
//!     → static_dir.rs (ServeDir lookup, clean-URL retry)
//!     → Response (200 / 206 / 304 / 404 / ...)
//! ```
//!
//! The responder only ever looks at the status of what comes back. Caching
//! semantics (Last-Modified, conditional GET, ranges) belong to the resolver.

pub mod static_dir;

use axum::{body::Body, http::Request, response::Response};
use futures_util::future::BoxFuture;

pub use static_dir::StaticDirResolver;

/// Maps a request to a stored asset.
///
/// Implementations report a miss with status 404 and any internal fault as a
/// response status (usually 500); they never fail the request outright.
pub trait AssetResolver: Send + Sync + 'static {
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'static, Response>;
}
