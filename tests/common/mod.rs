//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use kv_server::config::KvConfig;
use kv_server::{HttpServer, Reporter, Shutdown, Store};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<Store>,
    pub shutdown: Shutdown,
    pub server_task: JoinHandle<Result<(), std::io::Error>>,
    pub reporter_task: JoinHandle<u64>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Boot the HTTP server and reporter the same way the binary does.
pub async fn start_server(mut config: KvConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(Store::new());
    let shutdown = Shutdown::new();

    let reporter = Reporter::from_config(store.clone(), &config.reporter);
    let reporter_task = tokio::spawn(reporter.run(shutdown.subscribe()));

    let server = HttpServer::new(&config, store.clone());
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        store,
        shutdown,
        server_task,
        reporter_task,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
