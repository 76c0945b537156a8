//! Edge responder: static assets behind a hardened header set.

pub mod assets;
pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use assets::{AssetResolver, StaticDirResolver};
pub use config::schema::ResponderConfig;
pub use http::{HttpServer, Responder};
pub use lifecycle::Shutdown;
pub use security::harden;
