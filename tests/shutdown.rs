//! Graceful shutdown behaviour of a running server.

use std::time::Duration;

use kv_server::config::KvConfig;

mod common;

#[tokio::test]
async fn test_shutdown_stops_reporter_and_listener() {
    let mut config = KvConfig::default();
    config.reporter.interval_secs = 1;
    let server = common::start_server(config).await;
    let client = common::client();

    let res = client.get(server.url("/stats")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    assert!(server.shutdown.trigger());
    // A second fire must be harmless.
    assert!(!server.shutdown.trigger());

    tokio::time::timeout(Duration::from_secs(5), server.reporter_task)
        .await
        .expect("reporter should stop")
        .unwrap();

    tokio::time::timeout(Duration::from_secs(5), server.server_task)
        .await
        .expect("server should stop")
        .unwrap()
        .unwrap();

    let fresh = reqwest::Client::builder()
        .no_proxy()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();
    assert!(fresh
        .get(format!("http://{}/stats", server.addr))
        .send()
        .await
        .is_err());
}

#[tokio::test]
async fn test_reporter_ticks_while_serving() {
    let mut config = KvConfig::default();
    config.reporter.interval_secs = 1;
    let server = common::start_server(config).await;

    tokio::time::sleep(Duration::from_millis(2_300)).await;
    server.shutdown.trigger();

    let reports = tokio::time::timeout(Duration::from_secs(5), server.reporter_task)
        .await
        .unwrap()
        .unwrap();
    assert!(reports >= 1, "expected at least one report, got {}", reports);
    // Reporting is not a request.
    assert_eq!(server.store.current_stats().requests, 0);
}
