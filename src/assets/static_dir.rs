//! Directory-backed asset resolver.
//!
//! # Responsibilities
//! - Serve files below a root directory through `tower_http::services::ServeDir`
//! - Resolve directories to their `index.html`
//! - Retry extension-less misses as `<path>.html` (clean URLs)
//! - Optionally serve `.br` / `.gz` siblings to clients that accept them
//!
//! Content types, `Last-Modified`, conditional GET and byte ranges come from
//! `ServeDir` and are passed through untouched.

use std::convert::Infallible;
use std::path::Path;

use axum::{
    body::Body,
    http::{uri::PathAndQuery, HeaderMap, Method, Request, StatusCode, Uri, Version},
    response::Response,
};
use futures_util::future::BoxFuture;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::assets::AssetResolver;
use crate::config::AssetsConfig;

/// Serves static files from a directory.
#[derive(Debug, Clone)]
pub struct StaticDirResolver {
    serve_dir: ServeDir,
    html_extension_fallback: bool,
}

impl StaticDirResolver {
    /// Resolver rooted at `root` with clean URLs enabled.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            serve_dir: ServeDir::new(root).append_index_html_on_directories(true),
            html_extension_fallback: true,
        }
    }

    /// Build a resolver from the `[assets]` config section.
    pub fn from_config(config: &AssetsConfig) -> Self {
        let resolver = Self::new(&config.root)
            .with_html_extension_fallback(config.html_extension_fallback);

        if config.precompressed {
            resolver.with_precompressed()
        } else {
            resolver
        }
    }

    /// Enable or disable the `.html` retry for extension-less paths.
    pub fn with_html_extension_fallback(mut self, enabled: bool) -> Self {
        self.html_extension_fallback = enabled;
        self
    }

    /// Prefer `.br` / `.gz` siblings when the client accepts them.
    pub fn with_precompressed(mut self) -> Self {
        self.serve_dir = self.serve_dir.precompressed_br().precompressed_gzip();
        self
    }
}

/// Parts needed to replay a request against a different URI.
struct Replay {
    uri: Uri,
    method: Method,
    version: Version,
    headers: HeaderMap,
}

impl Replay {
    fn into_request(self) -> Request<Body> {
        let mut request = Request::new(Body::empty());
        *request.method_mut() = self.method;
        *request.uri_mut() = self.uri;
        *request.version_mut() = self.version;
        *request.headers_mut() = self.headers;
        request
    }
}

impl AssetResolver for StaticDirResolver {
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        let serve_dir = self.serve_dir.clone();
        let replay = if self.html_extension_fallback {
            html_candidate(request.uri()).map(|uri| Replay {
                uri,
                method: request.method().clone(),
                version: request.version(),
                headers: request.headers().clone(),
            })
        } else {
            None
        };

        Box::pin(async move {
            let response = serve(serve_dir.clone(), request).await;
            if response.status() != StatusCode::NOT_FOUND {
                return response;
            }

            match replay {
                Some(replay) => {
                    tracing::trace!(uri = %replay.uri, "Retrying asset lookup as .html");
                    serve(serve_dir, replay.into_request()).await
                }
                None => response,
            }
        })
    }
}

async fn serve(serve_dir: ServeDir, request: Request<Body>) -> Response {
    let result: Result<_, Infallible> = serve_dir.oneshot(request).await;
    match result {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

/// `/about?x=1` → `/about.html?x=1`; `None` for directories and paths whose
/// last segment already has an extension.
fn html_candidate(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    if path.ends_with('/') {
        return None;
    }

    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if last_segment.is_empty() || last_segment.contains('.') {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{path}.html?{query}"),
        None => format!("{path}.html"),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>().ok()?);
    Uri::from_parts(parts).ok()
}
