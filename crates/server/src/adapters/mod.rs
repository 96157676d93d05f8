// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chain adapters.
//!
//! Each adapter turns a validated height or hash into chain-specific RPC calls
//! and reshapes the raw answer into a small, fixed-shape DTO. Both adapters
//! expose the same two operations through [`ChainAdapter`] but keep their own
//! block and transaction types.

pub mod cosmos;
pub mod evm;

pub use cosmos::{CosmosAdapter, CosmosBlock, CosmosFee, CosmosTransaction};
pub use evm::{EvmAdapter, EvmBlock, EvmTransaction};

use crate::metrics;
use crate::rpc::{RpcResponse, TransportError};
use crate::types::{BlockHeight, TxHash};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// The upstream answered with an explicit JSON-RPC error.
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Block not found")]
    BlockNotFound,

    #[error("Transaction not found")]
    TransactionNotFound,

    /// The upstream could not be reached or did not answer with JSON.
    #[error("Upstream request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Unexpected upstream response shape: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl AdapterError {
    /// Short label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            AdapterError::Rpc(_) => "rpc_error",
            AdapterError::BlockNotFound | AdapterError::TransactionNotFound => "not_found",
            AdapterError::Transport(_) => "transport_error",
            AdapterError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// The two lookups every supported chain provides.
#[async_trait]
pub trait ChainAdapter: Send + Sync + 'static {
    /// Chain name used in logs and metric labels.
    const CHAIN: &'static str;

    type Block: Serialize + Send;
    type Transaction: Serialize + Send;

    async fn get_block_by_height(&self, height: &BlockHeight) -> Result<Self::Block, AdapterError>;

    async fn get_transaction_by_hash(
        &self,
        hash: &TxHash,
    ) -> Result<Self::Transaction, AdapterError>;
}

/// Unwrap a JSON-RPC envelope.
///
/// An error object wins over any result. A missing or `null` result yields
/// `Ok(None)`; callers decide which "not found" that is.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    body: Value,
    prefer_error_data: bool,
) -> Result<Option<T>, AdapterError> {
    let response: RpcResponse<Value> = serde_json::from_value(body)?;

    if let Some(error) = response.error {
        return Err(AdapterError::Rpc(error.reason(prefer_error_data)));
    }

    match response.result {
        Some(result) => Ok(Some(serde_json::from_value(result)?)),
        None => Ok(None),
    }
}

/// Record one upstream round trip in the metrics registry.
pub(crate) fn observe_call<T>(
    chain: &'static str,
    method: &'static str,
    started: Instant,
    result: &Result<T, AdapterError>,
) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(err) => err.outcome(),
    };
    metrics::record_upstream_call(chain, method, outcome, started.elapsed().as_secs_f64());
}

/// `Some(s)` only when `s` is present and not empty.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
