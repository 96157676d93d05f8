// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! EVM JSON-RPC adapter (`eth_getBlockByNumber`, `eth_getTransactionByHash`).
//!
//! Quantities are forwarded as the hex strings the node returns; only the block
//! height is echoed back as the decimal the caller asked for.

use super::{AdapterError, ChainAdapter, decode_envelope, non_empty, observe_call};
use crate::rpc::{JsonRpcRequest, RpcTransport};
use crate::types::{BlockHeight, TxHash};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
const GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvmBlock {
    pub height: u64,
    pub hash: String,
    pub parent_hash: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransaction {
    pub hash: String,
    /// `null` for contract-creation transactions.
    pub to: Option<String>,
    pub from: String,
    pub value: String,
    pub input: String,
    // Legacy and EIP-1559 transactions carry different fee fields; absent ones stay absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    hash: Option<String>,
    parent_hash: Option<String>,
    gas_limit: Option<String>,
    gas_used: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    hash: Option<String>,
    to: Option<String>,
    from: Option<String>,
    value: Option<String>,
    input: Option<String>,
    max_fee_per_gas: Option<String>,
    max_priority_fee_per_gas: Option<String>,
    gas_price: Option<String>,
}

impl RawBlock {
    fn normalize(self, height: &BlockHeight) -> EvmBlock {
        EvmBlock {
            height: height.value(),
            hash: self.hash.unwrap_or_default(),
            parent_hash: self.parent_hash.unwrap_or_default(),
            gas_limit: self.gas_limit.unwrap_or_default(),
            gas_used: self.gas_used.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
        }
    }
}

impl RawTransaction {
    fn normalize(self) -> EvmTransaction {
        EvmTransaction {
            hash: self.hash.unwrap_or_default(),
            to: non_empty(self.to),
            from: self.from.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            input: self.input.unwrap_or_default(),
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            gas_price: self.gas_price,
        }
    }
}

pub struct EvmAdapter {
    transport: Arc<dyn RpcTransport>,
    url: String,
}

impl EvmAdapter {
    pub fn new(transport: Arc<dyn RpcTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    async fn call<T: DeserializeOwned + Send>(
        &self,
        method: &'static str,
        params: serde_json::Value,
    ) -> Result<Option<T>, AdapterError> {
        let started = Instant::now();
        let result = async {
            let body = self
                .transport
                .post(&self.url, JsonRpcRequest::new(method, params).into_value())
                .await?;
            decode_envelope(body, false)
        }
        .await;
        observe_call(Self::CHAIN, method, started, &result);
        result
    }
}

#[async_trait]
impl ChainAdapter for EvmAdapter {
    const CHAIN: &'static str = "evm";

    type Block = EvmBlock;
    type Transaction = EvmTransaction;

    async fn get_block_by_height(&self, height: &BlockHeight) -> Result<EvmBlock, AdapterError> {
        let height_hex = height.to_hex();
        tracing::debug!(chain = Self::CHAIN, %height, %height_hex, "Fetching block");

        // `false`: transaction hashes only, not full objects
        let block: RawBlock = self
            .call(GET_BLOCK_BY_NUMBER, json!([height_hex, false]))
            .await?
            .ok_or(AdapterError::BlockNotFound)?;

        Ok(block.normalize(height))
    }

    async fn get_transaction_by_hash(&self, hash: &TxHash) -> Result<EvmTransaction, AdapterError> {
        tracing::debug!(chain = Self::CHAIN, %hash, "Fetching transaction");

        let tx: RawTransaction = self
            .call(GET_TRANSACTION_BY_HASH, json!([hash.prefixed()]))
            .await?
            .ok_or(AdapterError::TransactionNotFound)?;

        Ok(tx.normalize())
    }
}
