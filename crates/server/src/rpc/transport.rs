// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream {url} answered with status {status} and a body that is not JSON")]
    InvalidBody {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal HTTP capability the adapters need: one JSON document per call.
///
/// Implementations own timeouts and connection handling; adapters see a single
/// request/response exchange.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, TransportError>;

    async fn post(&self, url: &str, body: Value) -> Result<Value, TransportError>;
}

/// [`RpcTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Decode the body as JSON whatever the status code. Tendermint reports
    /// JSON-RPC errors with HTTP 500, and the envelope is what callers need.
    async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| TransportError::InvalidBody {
            url: url.to_string(),
            status: status.as_u16(),
            source,
        })
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| TransportError::Request {
                    url: url.to_string(),
                    source,
                })?;
        Self::read_json(url, response).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;
        Self::read_json(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> HttpTransport {
        HttpTransport::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/block"))
            .and(query_param("height", "10"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "result": {}})),
            )
            .mount(&server)
            .await;

        let body = transport()
            .get(&format!("{}/block?height=10", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, json!({"jsonrpc": "2.0", "result": {}}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        let request = json!({"jsonrpc": "2.0", "id": 1, "method": "eth_chainId", "params": []});
        Mock::given(method("POST"))
            .and(body_json(request.clone()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": "0x531"})),
            )
            .mount(&server)
            .await;

        let body = transport().post(&server.uri(), request).await.unwrap();
        assert_eq!(body["result"], "0x531");
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": -1,
                "error": {"code": -32603, "message": "Internal error", "data": "tx not found"}
            })))
            .mount(&server)
            .await;

        let body = transport()
            .get(&format!("{}/tx?hash=0xabc", server.uri()))
            .await
            .unwrap();
        assert_eq!(body["error"]["data"], "tx not found");
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = transport().get(&server.uri()).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::InvalidBody { status: 502, .. }
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_a_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(Duration::from_millis(50)).unwrap();
        let err = transport.get(&server.uri()).await.unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }));
    }
}
