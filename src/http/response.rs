//! Responses synthesized by the responder itself.
//!
//! # Responsibilities
//! - 405 for disallowed methods
//! - JSON liveness payload for the health route
//! - Friendly HTML page replacing an asset miss
//!
//! None of these add security headers; that happens once, on the way out.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

use crate::health::HealthStatus;

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";
pub const TEXT_HTML_UTF8: &str = "text/html; charset=utf-8";

/// Body of the 405 response.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";

/// Document served in place of any asset miss.
pub const NOT_FOUND_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Not found</title>
<meta name="viewport" content="width=device-width, initial-scale=1"></head>
<body style="font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Cantarell,Noto Sans,sans-serif;max-width:60ch;margin:10vh auto;padding:0 1rem;">
  <h1>404 – Page not found</h1>
  <p>The page you requested does not exist.</p>
  <p><a href="/">Go home</a></p>
</body>
</html>"#;

fn build(status: StatusCode, content_type: &'static str, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// 405 with a plain-text body.
pub fn method_not_allowed() -> Response {
    build(
        StatusCode::METHOD_NOT_ALLOWED,
        TEXT_PLAIN_UTF8,
        Body::from(METHOD_NOT_ALLOWED_BODY),
    )
}

/// 200 carrying `status` as JSON.
pub fn health(status: &HealthStatus) -> Response {
    match serde_json::to_vec(status) {
        Ok(json) => build(StatusCode::OK, APPLICATION_JSON_UTF8, Body::from(json)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize health payload");
            build(
                StatusCode::INTERNAL_SERVER_ERROR,
                TEXT_PLAIN_UTF8,
                Body::from("Internal Server Error"),
            )
        }
    }
}

/// 404 with the friendly HTML page.
pub fn not_found_page() -> Response {
    build(
        StatusCode::NOT_FOUND,
        TEXT_HTML_UTF8,
        Body::from(NOT_FOUND_PAGE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn method_not_allowed_is_plain_text() {
        let response = method_not_allowed();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_string(response).await, "Method Not Allowed");
    }

    #[tokio::test]
    async fn health_body_is_json() {
        let response = health(&HealthStatus::now());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );

        let body: HealthStatus = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body.ok);
    }

    #[tokio::test]
    async fn not_found_page_links_home() {
        let response = not_found_page();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = body_string(response).await;
        assert!(body.contains("<title>Not found</title>"));
        assert!(body.contains("<h1>404 – Page not found</h1>"));
        assert!(body.contains(r#"<a href="/">"#));
    }
}
