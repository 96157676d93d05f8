// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test fixtures for exercising adapters without a network.
//!
//! [`MockTransport`] answers JSON-RPC POSTs by method name and REST-style GETs
//! by full URL. Every call is recorded so tests can assert on what was sent
//! upstream and in which order.

use crate::rpc::{RpcTransport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Lowercase, `0x`-prefixed transaction hash used across tests.
pub const TEST_TX_HASH: &str =
    "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Failure,
}

/// One request seen by the mock. `body` is `None` for GETs.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockTransportBuilder {
    by_method: HashMap<String, Reply>,
    by_url: HashMap<String, Reply>,
}

impl MockTransportBuilder {
    /// Answer POSTs whose JSON-RPC `method` is `method` with `response`.
    pub fn method_response(mut self, method: &str, response: Value) -> Self {
        self.by_method.insert(method.to_string(), Reply::Json(response));
        self
    }

    /// Make POSTs for `method` fail at the transport level.
    pub fn method_failure(mut self, method: &str) -> Self {
        self.by_method.insert(method.to_string(), Reply::Failure);
        self
    }

    /// Answer GETs for exactly `url` with `response`.
    pub fn get_response(mut self, url: &str, response: Value) -> Self {
        self.by_url.insert(url.to_string(), Reply::Json(response));
        self
    }

    /// Make GETs for exactly `url` fail at the transport level.
    pub fn get_failure(mut self, url: &str) -> Self {
        self.by_url.insert(url.to_string(), Reply::Failure);
        self
    }

    pub fn build(self) -> Arc<MockTransport> {
        Arc::new(MockTransport {
            by_method: self.by_method,
            by_url: self.by_url,
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[derive(Debug)]
pub struct MockTransport {
    by_method: HashMap<String, Reply>,
    by_url: HashMap<String, Reply>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::default()
    }

    /// Requests seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, url: &str, body: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            body,
        });
    }
}

/// Same error the HTTP transport produces for an HTML error page.
fn failure(url: &str) -> TransportError {
    TransportError::InvalidBody {
        url: url.to_string(),
        status: 502,
        source: serde_json::from_str::<Value>("<html>").unwrap_err(),
    }
}

fn reply(url: &str, reply: Option<&Reply>) -> Result<Value, TransportError> {
    match reply {
        Some(Reply::Json(value)) => Ok(value.clone()),
        // Unexpected calls fail loudly rather than returning a default
        Some(Reply::Failure) | None => Err(failure(url)),
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        self.record(url, None);
        reply(url, self.by_url.get(url))
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value, TransportError> {
        let method = body
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        self.record(url, Some(body));
        reply(url, self.by_method.get(&method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport_routes_by_method_and_url() {
        let mock = MockTransport::builder()
            .method_response("eth_chainId", json!({"result": "0x1"}))
            .get_response("http://node/status", json!({"result": {}}))
            .build();

        let posted = mock
            .post("http://node", json!({"method": "eth_chainId"}))
            .await
            .unwrap();
        assert_eq!(posted["result"], "0x1");

        let fetched = mock.get("http://node/status").await.unwrap();
        assert_eq!(fetched, json!({"result": {}}));

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].body.is_some());
        assert!(calls[1].body.is_none());
    }

    #[tokio::test]
    async fn test_mock_transport_unknown_call_fails() {
        let mock = MockTransport::builder().build();
        assert!(mock.get("http://node/missing").await.is_err());
        assert!(mock.post("http://node", json!({})).await.is_err());
        assert_eq!(mock.calls().len(), 2);
    }
}
