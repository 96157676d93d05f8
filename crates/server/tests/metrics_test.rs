// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use axum::http::StatusCode;
use common::{gateway, rpc_result, send_get, send_get_text};
use serde_json::json;
use server::metrics;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_metrics_initialization() {
    metrics::init("test");

    let metrics_text = metrics::gather_metrics().unwrap();

    // Counters appear even with zero values; histograms only once observed
    assert!(metrics_text.contains("test_http_requests"));
    assert!(metrics_text.contains("test_http_request_success"));
    assert!(metrics_text.contains("test_http_request_error"));
}

#[test]
fn test_http_metrics_increment() {
    use server::metrics::registry::{HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS};

    metrics::init("test");

    let initial_total = HTTP_REQUESTS.get();
    let initial_success = HTTP_REQUEST_SUCCESS.get();
    let initial_error = HTTP_REQUEST_ERROR.get();

    HTTP_REQUESTS.inc();
    HTTP_REQUEST_SUCCESS.inc();
    HTTP_REQUEST_ERROR.inc();

    assert!(HTTP_REQUESTS.get() >= initial_total + 1.0);
    assert!(HTTP_REQUEST_SUCCESS.get() >= initial_success + 1.0);
    assert!(HTTP_REQUEST_ERROR.get() >= initial_error + 1.0);
}

#[tokio::test]
async fn test_requests_are_labelled_by_route_and_upstream() {
    metrics::init("test");

    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!(null))))
        .mount(&upstream)
        .await;

    let app = gateway(&upstream.uri(), "http://127.0.0.1:9", true);

    let (status, _) = send_get(app.clone(), "/evm/block/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, text) = send_get_text(app.clone(), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("test_request_duration_seconds"));
    assert!(text.contains("route=\"/evm/block/:height\""), "{text}");
    assert!(text.contains("test_upstream_requests"));
    assert!(text.contains("chain=\"evm\""));
    assert!(text.contains("method=\"eth_getBlockByNumber\""));
    assert!(text.contains("outcome=\"not_found\""));

    let (status, body) = send_get(app, "/metrics.json").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|family| family["name"].as_str())
        .collect();
    assert!(names.contains(&"test_upstream_duration_seconds"));
}
