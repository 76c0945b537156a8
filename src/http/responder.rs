//! Request routing for the responder.
//!
//! # Responsibilities
//! - Reject anything but GET/HEAD (case-insensitive) with 405
//! - Answer the health-check route directly
//! - Delegate everything else to the asset resolver
//! - Swap an asset miss for the friendly 404 page
//!
//! Every branch returns through `Responder::handle`, the only place the
//! hardened header set is applied.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};

use crate::assets::AssetResolver;
use crate::health::{self, HealthStatus};
use crate::http::response;
use crate::observability::metrics;
use crate::security::harden;

/// Which branch produced a response. Used for logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rejected,
    Health,
    Asset,
    NotFound,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Rejected => "rejected",
            Outcome::Health => "health",
            Outcome::Asset => "asset",
            Outcome::NotFound => "not_found",
        }
    }
}

/// Routes a request to one of the responder's behaviors.
#[derive(Clone)]
pub struct Responder {
    assets: Arc<dyn AssetResolver>,
}

impl Responder {
    pub fn new(assets: Arc<dyn AssetResolver>) -> Self {
        Self { assets }
    }

    /// Handle one request end to end; the result always carries the
    /// hardened header set.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        let start = Instant::now();
        let method = request.method().clone();
        let path = request.uri().path().to_owned();

        let (outcome, response) = self.dispatch(request).await;
        let response = harden(response);

        let status = response.status().as_u16();
        tracing::debug!(
            method = %method,
            path = %path,
            status,
            outcome = outcome.as_str(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Request handled"
        );
        metrics::record_request(method_label(&method), status, outcome.as_str(), start);

        response
    }

    async fn dispatch(&self, mut request: Request<Body>) -> (Outcome, Response) {
        let Some(method) = allowed_method(request.method()) else {
            return (Outcome::Rejected, response::method_not_allowed());
        };

        if health::is_health_path(request.uri().path()) {
            return (Outcome::Health, response::health(&HealthStatus::now()));
        }

        *request.method_mut() = method;
        let resolved = self.assets.resolve(request).await;

        if resolved.status() == StatusCode::NOT_FOUND {
            (Outcome::NotFound, response::not_found_page())
        } else {
            (Outcome::Asset, resolved)
        }
    }
}

/// Canonical form of `method` if it is GET or HEAD in any letter case.
pub fn allowed_method(method: &Method) -> Option<Method> {
    match method.as_str().to_ascii_uppercase().as_str() {
        "GET" => Some(Method::GET),
        "HEAD" => Some(Method::HEAD),
        _ => None,
    }
}

/// Metric label for `method`: the canonical allowed method, or `OTHER` for
/// anything rejected, so client-chosen tokens never become label values.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str().to_ascii_uppercase().as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        _ => "OTHER",
    }
}
