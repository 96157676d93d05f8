// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use config::GatewayConfig;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{app::create_app, state::AppState};
use tower::ServiceExt;

pub const BARE_HASH: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

/// Gateway wired to the given upstream base URLs through the real HTTP transport.
pub fn gateway(evm_url: &str, cosmos_url: &str, metrics_enabled: bool) -> Router {
    let mut config = GatewayConfig::default();
    config.upstream.evm_url = evm_url.to_string();
    config.upstream.cosmos_url = cosmos_url.to_string();
    config.upstream.timeout_ms = 2_000;
    config.metrics.enabled = metrics_enabled;

    let state = AppState::new(config).expect("Failed to build HTTP transport");
    create_app(state)
}

pub async fn send_get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn send_get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub fn rpc_result(result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": 1, "result": result})
}

pub fn rpc_error(code: i64, message: &str, data: Option<&str>) -> Value {
    let mut error = json!({"code": code, "message": message});
    if let Some(data) = data {
        error["data"] = json!(data);
    }
    json!({"jsonrpc": "2.0", "id": -1, "error": error})
}

pub fn assert_envelope(body: &Value, status: StatusCode, message: &str) {
    assert_eq!(body["statusCode"], status.as_u16());
    assert_eq!(body["message"], message);
    assert!(body["timestamp"].is_string(), "timestamp missing: {body}");
}
