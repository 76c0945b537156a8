//! Security response headers.
//!
//! # Responsibilities
//! - Define the fixed hardened header set
//! - Merge it into any response without touching the body
//!
//! Colliding names are overwritten (every prior value removed), so hardening
//! an already-hardened response is a no-op on the header map.

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Response};

/// Content Security Policy for a self-hosted static site.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self'; \
style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self' data:; \
object-src 'none'; base-uri 'self'; frame-ancestors 'none'; upgrade-insecure-requests";

pub const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");
pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");
pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");
pub const CROSS_ORIGIN_RESOURCE_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-resource-policy");

/// The hardened header set, in the order it is applied.
pub const SECURITY_HEADERS: [(HeaderName, HeaderValue); 8] = [
    (
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    ),
    (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
    (
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    ),
    (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
    (
        PERMISSIONS_POLICY,
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    ),
    (
        CROSS_ORIGIN_OPENER_POLICY,
        HeaderValue::from_static("same-origin"),
    ),
    (
        CROSS_ORIGIN_EMBEDDER_POLICY,
        HeaderValue::from_static("require-corp"),
    ),
    (
        CROSS_ORIGIN_RESOURCE_POLICY,
        HeaderValue::from_static("same-origin"),
    ),
];

/// Overwrite every hardened header in `headers`.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, value);
    }
}

/// Return `response` with the hardened header set merged in.
///
/// Status, reason phrase, version and extensions travel with the response
/// parts unchanged; the body is handed over without being polled.
pub fn harden<B>(response: Response<B>) -> Response<B> {
    let (mut parts, body) = response.into_parts();
    apply_security_headers(&mut parts.headers);
    Response::from_parts(parts, body)
}
