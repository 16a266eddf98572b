//! Load testing for the key-value server.

use std::collections::HashMap;
use std::time::Instant;

use kv_server::config::KvConfig;

mod common;

#[tokio::test]
async fn test_concurrent_disjoint_puts() {
    let server = common::start_server(KvConfig::default()).await;

    let concurrency = 20;
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;

    let client = common::client();
    let start = Instant::now();

    let mut handles = Vec::with_capacity(concurrency);
    for task in 0..concurrency {
        let client = client.clone();
        let url = server.url("/data");
        handles.push(tokio::spawn(async move {
            let mut created = 0;
            for i in 0..requests_per_task {
                let body = HashMap::from([(format!("t{}-{}", task, i), i.to_string())]);
                if let Ok(res) = client.post(&url).json(&body).send().await {
                    if res.status() == 201 {
                        created += 1;
                    }
                }
            }
            created
        }));
    }

    let mut created = 0;
    for handle in handles {
        created += handle.await.unwrap();
    }
    let elapsed = start.elapsed();

    println!(
        "{} puts in {:?} ({:.0} req/s)",
        total_requests,
        elapsed,
        total_requests as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(created, total_requests);
    let stats = server.store.current_stats();
    assert_eq!(stats.requests, total_requests as u64);
    assert_eq!(stats.database_size, total_requests);

    server.shutdown.trigger();
}
