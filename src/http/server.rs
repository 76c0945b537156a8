//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the responder as its only handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Stop on the shutdown signal, draining in-flight requests

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::assets::{AssetResolver, StaticDirResolver};
use crate::config::ResponderConfig;
use crate::http::responder::Responder;

/// HTTP server for the responder.
pub struct HttpServer {
    router: Router,
    config: ResponderConfig,
}

impl HttpServer {
    /// Create a server that serves `config.assets.root` from disk.
    pub fn new(config: ResponderConfig) -> Self {
        let assets = Arc::new(StaticDirResolver::from_config(&config.assets));
        Self::with_resolver(config, assets)
    }

    /// Create a server backed by an arbitrary asset resolver.
    pub fn with_resolver(config: ResponderConfig, assets: Arc<dyn AssetResolver>) -> Self {
        let router = Self::build_router(Responder::new(assets));
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// There are no Axum routes: method and path dispatch live in the
    /// responder, so every request lands in the fallback.
    fn build_router(responder: Responder) -> Router {
        Router::new()
            .fallback(respond)
            .with_state(responder)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            asset_root = %self.config.assets.root.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }
}

async fn respond(State(responder): State<Responder>, request: Request<Body>) -> Response {
    responder.handle(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::SECURITY_HEADERS;
    use axum::http::StatusCode;
    use futures_util::future::BoxFuture;
    use tower::ServiceExt;

    struct Empty;

    impl AssetResolver for Empty {
        fn resolve(&self, _request: Request<Body>) -> BoxFuture<'static, Response> {
            Box::pin(async {
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::NOT_FOUND;
                response
            })
        }
    }

    fn server() -> HttpServer {
        HttpServer::with_resolver(ResponderConfig::default(), Arc::new(Empty))
    }

    #[tokio::test]
    async fn every_path_reaches_the_responder() {
        let router = server().router();

        for uri in ["/", "/api/health", "/deep/nested/path", "/file.txt"] {
            let response = router
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            for (name, _) in SECURITY_HEADERS {
                assert!(response.headers().contains_key(&name), "{uri} lacks {name}");
            }
        }
    }

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() {
        let response = server()
            .router()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));

        let response = server()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn axum_does_not_intercept_methods() {
        let response = server()
            .router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
