//! Shared utilities for end-to-end tests.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use edge_responder::config::ResponderConfig;
use edge_responder::{HttpServer, Shutdown};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A small site: an index, a clean-URL page and one stylesheet.
pub fn sample_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<!doctype html><h1>Home</h1>").unwrap();
    fs::write(dir.path().join("about.html"), "<!doctype html><h1>About</h1>").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/site.css"), "body { margin: 0 }").unwrap();
    dir
}

/// Start a responder serving `root` on an ephemeral port.
///
/// The returned `Shutdown` stops the server when triggered or dropped.
pub async fn start_responder(root: &Path) -> (SocketAddr, Shutdown) {
    let mut config = ResponderConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.assets.root = root.to_path_buf();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that never pools connections, so shutdown tests are deterministic.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub const SECURITY_HEADER_NAMES: [&str; 8] = [
    "content-security-policy",
    "referrer-policy",
    "x-content-type-options",
    "x-frame-options",
    "permissions-policy",
    "cross-origin-opener-policy",
    "cross-origin-embedder-policy",
    "cross-origin-resource-policy",
];

pub fn assert_hardened(response: &reqwest::Response) {
    for name in SECURITY_HEADER_NAMES {
        assert!(
            response.headers().contains_key(name),
            "{} missing from {} response",
            name,
            response.status()
        );
    }
}
