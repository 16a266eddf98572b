//! End-to-end request scenarios over a real socket.

use std::collections::HashMap;

use kv_server::config::KvConfig;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_put_get_delete_stats_scenario() {
    let server = common::start_server(KvConfig::default()).await;
    let client = common::client();

    let res = client
        .post(server.url("/data"))
        .json(&json!({"x": "1", "y": "2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let res = client.get(server.url("/data")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let data: HashMap<String, String> = res.json().await.unwrap();
    let expected = HashMap::from([
        ("x".to_string(), "1".to_string()),
        ("y".to_string(), "2".to_string()),
    ]);
    assert_eq!(data, expected);
    assert_eq!(server.store.current_stats().requests, 2);

    let res = client.delete(server.url("/data/x")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let data: HashMap<String, String> = client
        .get(server.url("/data"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(data, HashMap::from([("y".to_string(), "2".to_string())]));

    let stats: Value = client
        .get(server.url("/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats, json!({"requests": 4, "database_size": 1}));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_delete_rejections_do_not_count() {
    let server = common::start_server(KvConfig::default()).await;
    let client = common::client();

    let res = client.delete(server.url("/data/")).send().await.unwrap();
    assert_eq!(res.status(), 400);

    let res = client.delete(server.url("/data/missing")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    assert_eq!(server.store.current_stats().requests, 0);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_post_without_content_type() {
    let server = common::start_server(KvConfig::default()).await;
    let client = common::client();

    let res = client
        .post(server.url("/data"))
        .body(r#"{"plain":"body"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let res = client
        .post(server.url("/data"))
        .body(r#"{"n":42}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client.patch(server.url("/data")).send().await.unwrap();
    assert_eq!(res.status(), 405);

    assert_eq!(server.store.current_stats().database_size, 1);

    server.shutdown.trigger();
}
