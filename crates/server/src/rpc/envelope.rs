// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use serde_json::{Value, json};

/// Outbound JSON-RPC 2.0 call.
#[derive(Debug, Clone)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }

    pub fn into_value(self) -> Value {
        json!({
            "jsonrpc": self.jsonrpc,
            "id": self.id,
            "method": self.method,
            "params": self.params,
        })
    }
}

/// The `{jsonrpc, id, result, error}` wrapper both upstreams answer with.
///
/// `result` is optional because a missing or `null` result is a meaningful
/// "not found" answer rather than a decoding failure. `jsonrpc` and `id` are
/// not checked and are skipped on decode.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcErrorObject {
    /// Human-readable reason for the failure.
    ///
    /// Tendermint puts the useful detail in `data` and a generic phrase such as
    /// "Internal error" in `message`, so callers can ask for `data` first.
    /// Only a non-empty string `data` is used.
    pub fn reason(&self, prefer_data: bool) -> String {
        if prefer_data
            && let Some(Value::String(data)) = &self.data
            && !data.is_empty()
        {
            return data.clone();
        }
        self.message.clone()
    }
}
