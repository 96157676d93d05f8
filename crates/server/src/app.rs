// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    handlers::error::route_not_found,
    logging::http_logger_middleware,
    metrics::metrics_middleware,
    routes,
    state::AppState,
};
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
};
use tower_http::cors::CorsLayer;

/// Assemble the router. Every route is recorded in `state.route_registry`.
pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;
    let metrics_enabled = state.config.metrics.enabled;

    let mut router = Router::new()
        .merge(routes::root::routes(registry))
        .merge(routes::health::routes(registry))
        .merge(routes::version::routes(registry))
        .merge(routes::docs::routes(registry))
        .merge(routes::evm::routes(registry))
        .merge(routes::cosmos::routes(registry));

    if metrics_enabled {
        router = router.merge(routes::metrics::routes(registry));
    }

    router = router.fallback(route_not_found);

    if metrics_enabled {
        router = router.layer(from_fn_with_state(state.clone(), metrics_middleware));
    }

    router
        .layer(from_fn(http_logger_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{MockTransport, TEST_TX_HASH};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use config::GatewayConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const EVM_URL: &str = "http://evm.test";
    const COSMOS_URL: &str = "http://cosmos.test";

    fn test_state(mock: std::sync::Arc<MockTransport>, metrics_enabled: bool) -> AppState {
        let mut config = GatewayConfig::default();
        config.upstream.evm_url = EVM_URL.to_string();
        config.upstream.cosmos_url = COSMOS_URL.to_string();
        config.metrics.enabled = metrics_enabled;
        AppState::with_transport(config, mock)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, "GET", uri).await
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_evm_block_route() {
        let mock = MockTransport::builder()
            .method_response(
                "eth_getBlockByNumber",
                json!({"jsonrpc": "2.0", "id": 1, "result": {
                    "number": "0x7b",
                    "hash": "0xh",
                    "parentHash": "0xp",
                    "gasLimit": "0x1",
                    "gasUsed": "0x0",
                    "size": "0x2"
                }}),
            )
            .build();

        let (status, body) = get(create_app(test_state(mock.clone(), false)), "/evm/block/123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["height"], 123);
        assert_eq!(body["hash"], "0xh");
        assert_eq!(mock.calls()[0].url, EVM_URL);
    }

    #[tokio::test]
    async fn test_invalid_height_is_rejected_before_upstream() {
        let mock = MockTransport::builder().build();
        let (status, body) = get(create_app(test_state(mock.clone(), false)), "/cosmos/block/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Invalid block number");
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_height_is_missing() {
        let mock = MockTransport::builder().build();
        let (status, body) = get(create_app(test_state(mock, false)), "/evm/block/%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Block height is required");
    }

    #[tokio::test]
    async fn test_invalid_hash_is_rejected() {
        let mock = MockTransport::builder().build();
        let (status, body) =
            get(create_app(test_state(mock, false)), "/evm/transactions/0xnothex").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid transaction hash format");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let mock = MockTransport::builder()
            .method_response(
                "eth_getTransactionByHash",
                json!({"jsonrpc": "2.0", "id": 1, "result": null}),
            )
            .build();
        let uri = format!("/evm/transactions/{}", TEST_TX_HASH);
        let (status, body) = get(create_app(test_state(mock, false)), &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Transaction not found");
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500() {
        let mock = MockTransport::builder()
            .method_failure("eth_getBlockByNumber")
            .build();
        let (status, body) = get(create_app(test_state(mock, false)), "/evm/block/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_envelope() {
        let mock = MockTransport::builder().build();
        let (status, body) = get(create_app(test_state(mock, false)), "/solana/block/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Cannot GET /solana/block/1");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_route_uses_envelope() {
        let mock = MockTransport::builder().build();
        let (status, body) =
            send(create_app(test_state(mock.clone(), false)), "POST", "/evm/block/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "Cannot POST /evm/block/1");
        assert!(body["timestamp"].is_string());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_path_segment_uses_envelope() {
        let mock = MockTransport::builder().build();
        let (status, body) =
            get(create_app(test_state(mock.clone(), false)), "/evm/block/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Invalid URL: Invalid UTF-8 in `height`");
        assert!(body["timestamp"].is_string());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_root_lists_registered_routes() {
        let mock = MockTransport::builder().build();
        let (status, body) = get(create_app(test_state(mock, false)), "/").await;
        assert_eq!(status, StatusCode::OK);

        let paths: Vec<&str> = body["routes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["path"].as_str())
            .collect();
        assert!(paths.contains(&"/evm/block/:height"));
        assert!(paths.contains(&"/cosmos/transactions/:hash"));
        assert!(!paths.contains(&"/metrics"));
        assert_eq!(body["upstreams"]["cosmos"], COSMOS_URL);
    }

    #[tokio::test]
    async fn test_health_and_version() {
        let mock = MockTransport::builder().build();
        let (status, body) = get(create_app(test_state(mock.clone(), false)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));

        let (status, body) = get(create_app(test_state(mock, false)), "/version").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_metrics_routes_follow_config() {
        let mock = MockTransport::builder().build();
        let (status, _) = get(create_app(test_state(mock.clone(), false)), "/metrics.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        crate::metrics::init("test_gateway");
        let (status, body) = get(create_app(test_state(mock, true)), "/metrics.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_array());
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let mock = MockTransport::builder().build();
        let (status, body) = get(create_app(test_state(mock, false)), "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/cosmos/block/{height}"].is_object());
    }
}
