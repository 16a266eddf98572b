//! Request accounting middleware.
//!
//! Runs after routing so the matched route is known, and outside the timeout
//! and body-limit handling so 405/408/413 responses are recorded too.

use axum::{
    extract::{MatchedPath, Request},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

/// Name of the store operation a request maps to, for metric labels.
pub fn operation_for(method: &Method, matched_path: Option<&str>) -> &'static str {
    match matched_path {
        Some("/data") if method == Method::POST => "put",
        Some("/data") if method == Method::GET => "get",
        Some("/data/") | Some("/data/{*key}") if method == Method::DELETE => "delete",
        Some("/stats") if method == Method::GET => "stats",
        Some(_) => "method_not_allowed",
        None => "unrouted",
    }
}

pub async fn track_requests(request: Request, next: Next) -> Response {
    let operation = operation_for(
        request.method(),
        request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str),
    );

    let response = next.run(request).await;
    metrics::record_request(operation, response.status().as_u16());
    response
}
