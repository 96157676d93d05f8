// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cosmos-SDK / Tendermint RPC adapter (`/block`, `/tx`).
//!
//! Tendermint answers are deeply nested and many fields are optional, so every
//! field below is extracted with an explicit default. Transactions need two
//! calls: `/tx` for the result and `/block` at the transaction height for the
//! timestamp. Only the second call is allowed to fail quietly.

use super::{AdapterError, ChainAdapter, decode_envelope, non_empty, observe_call};
use crate::rpc::RpcTransport;
use crate::types::{BlockHeight, TxHash};
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

const BLOCK_ENDPOINT: &str = "block";
const TX_ENDPOINT: &str = "tx";

const FEE_EVENT: &str = "tx";
const FEE_ATTRIBUTE: &str = "fee";
const MESSAGE_EVENT: &str = "message";
const SENDER_ATTRIBUTE: &str = "sender";

lazy_static! {
    /// `<amount><denom>`, e.g. `1000usei`. The first occurrence is used.
    static ref FEE_PATTERN: Regex = Regex::new(r"(\d+)([a-zA-Z]+)").expect("valid fee regex");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CosmosBlock {
    pub height: String,
    /// ISO-8601 block time as reported by the node.
    pub time: String,
    pub hash: String,
    /// Validator address of the first last-commit signature, or `""`.
    pub proposed_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CosmosTransaction {
    pub hash: String,
    pub height: String,
    /// Time of the including block, or `""` when it could not be fetched.
    pub time: String,
    pub gas_used: String,
    pub gas_wanted: String,
    pub fee: CosmosFee,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CosmosFee {
    pub amount: String,
    pub denom: String,
}

impl Default for CosmosFee {
    fn default() -> Self {
        Self {
            amount: "0".to_string(),
            denom: String::new(),
        }
    }
}

impl CosmosFee {
    /// Parse an ABCI fee attribute such as `1000usei`.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = FEE_PATTERN.captures(value)?;
        Some(Self {
            amount: captures[1].to_string(),
            denom: captures[2].to_string(),
        })
    }
}

/// Tendermint encodes int64 values as strings, but not every node does.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Quantity {
    Text(String),
    Number(serde_json::Number),
}

impl Quantity {
    fn into_string(self) -> String {
        match self {
            Quantity::Text(s) => s,
            Quantity::Number(n) => n.to_string(),
        }
    }
}

fn quantity(value: Option<Quantity>) -> Option<String> {
    non_empty(value.map(Quantity::into_string))
}

#[derive(Debug, Deserialize)]
struct RawBlockResult {
    block_id: Option<RawBlockId>,
    block: Option<RawBlock>,
}

#[derive(Debug, Deserialize)]
struct RawBlockId {
    hash: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    header: Option<RawHeader>,
    last_commit: Option<RawLastCommit>,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    height: Option<Quantity>,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLastCommit {
    signatures: Option<Vec<Option<RawSignature>>>,
}

#[derive(Debug, Deserialize)]
struct RawSignature {
    validator_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTxResult {
    hash: Option<String>,
    height: Option<Quantity>,
    tx_result: Option<RawExecResult>,
}

#[derive(Debug, Deserialize)]
struct RawExecResult {
    gas_used: Option<Quantity>,
    gas_wanted: Option<Quantity>,
    events: Option<Vec<RawEvent>>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    attributes: Option<Vec<RawAttribute>>,
}

#[derive(Debug, Deserialize)]
struct RawAttribute {
    key: Option<String>,
    value: Option<String>,
}

impl RawBlock {
    fn proposed_address(&self) -> String {
        self.last_commit
            .as_ref()
            .and_then(|commit| commit.signatures.as_ref())
            .and_then(|signatures| signatures.first())
            .and_then(|first| first.as_ref())
            .and_then(|signature| signature.validator_address.clone())
            .unwrap_or_default()
    }

    fn time(&self) -> Option<String> {
        self.header
            .as_ref()
            .and_then(|header| non_empty(header.time.clone()))
    }
}

/// Value of the first non-empty `key` attribute in the first event of type
/// `event_type` that has one. Later events are never consulted once a match
/// is found.
fn find_event_attribute<'a>(events: &'a [RawEvent], event_type: &str, key: &str) -> Option<&'a str> {
    events
        .iter()
        .filter(|event| event.kind.as_deref() == Some(event_type))
        .find_map(|event| {
            event.attributes.as_deref()?.iter().find_map(|attr| {
                match (attr.key.as_deref(), attr.value.as_deref()) {
                    (Some(k), Some(v)) if k == key && !v.is_empty() => Some(v),
                    _ => None,
                }
            })
        })
}

fn extract_fee(events: &[RawEvent]) -> CosmosFee {
    find_event_attribute(events, FEE_EVENT, FEE_ATTRIBUTE)
        .and_then(CosmosFee::parse)
        .unwrap_or_default()
}

fn extract_sender(events: &[RawEvent]) -> String {
    find_event_attribute(events, MESSAGE_EVENT, SENDER_ATTRIBUTE)
        .map(str::to_string)
        .unwrap_or_default()
}

pub struct CosmosAdapter {
    transport: Arc<dyn RpcTransport>,
    base_url: String,
}

impl CosmosAdapter {
    pub fn new(transport: Arc<dyn RpcTransport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    async fn call<T: DeserializeOwned + Send>(
        &self,
        endpoint: &'static str,
        query: String,
    ) -> Result<Option<T>, AdapterError> {
        let url = format!("{}/{}?{}", self.base_url, endpoint, query);
        let started = Instant::now();
        let result = async {
            let body = self.transport.get(&url).await?;
            decode_envelope(body, true)
        }
        .await;
        observe_call(Self::CHAIN, endpoint, started, &result);
        result
    }

    /// Time of the block at `height`, or `""` if anything goes wrong.
    async fn block_time(&self, height: Option<&str>) -> String {
        let Some(height) = height else {
            return String::new();
        };

        match self
            .call::<RawBlockResult>(BLOCK_ENDPOINT, format!("height={}", height))
            .await
        {
            Ok(result) => result
                .and_then(|r| r.block)
                .and_then(|block| block.time())
                .unwrap_or_default(),
            Err(err) => {
                tracing::warn!(
                    chain = Self::CHAIN,
                    height,
                    error = %err,
                    "Block time lookup failed, returning transaction without time"
                );
                String::new()
            }
        }
    }
}

#[async_trait]
impl ChainAdapter for CosmosAdapter {
    const CHAIN: &'static str = "cosmos";

    type Block = CosmosBlock;
    type Transaction = CosmosTransaction;

    async fn get_block_by_height(&self, height: &BlockHeight) -> Result<CosmosBlock, AdapterError> {
        tracing::debug!(chain = Self::CHAIN, %height, "Fetching block");

        let result: Option<RawBlockResult> = self
            .call(BLOCK_ENDPOINT, format!("height={}", height))
            .await?;
        let (block_id, block) = match result {
            Some(RawBlockResult {
                block_id,
                block: Some(block),
            }) => (block_id, block),
            _ => return Err(AdapterError::BlockNotFound),
        };

        let proposed_address = block.proposed_address();
        let time = block.time().unwrap_or_default();
        let height = block
            .header
            .and_then(|header| quantity(header.height))
            .unwrap_or_default();
        let hash = block_id
            .and_then(|id| non_empty(id.hash))
            .unwrap_or_default();

        Ok(CosmosBlock {
            height,
            time,
            hash,
            proposed_address,
        })
    }

    async fn get_transaction_by_hash(
        &self,
        hash: &TxHash,
    ) -> Result<CosmosTransaction, AdapterError> {
        tracing::debug!(chain = Self::CHAIN, %hash, "Fetching transaction");

        let tx: RawTxResult = self
            .call(TX_ENDPOINT, format!("hash=0x{}", hash.bare()))
            .await?
            .ok_or(AdapterError::TransactionNotFound)?;

        let height = quantity(tx.height);
        // Without a height `/block` would answer with the latest block
        let time = self.block_time(height.as_deref()).await;

        let (gas_used, gas_wanted, events) = match tx.tx_result {
            Some(exec) => (
                quantity(exec.gas_used),
                quantity(exec.gas_wanted),
                exec.events.unwrap_or_default(),
            ),
            None => (None, None, Vec::new()),
        };

        Ok(CosmosTransaction {
            hash: tx.hash.unwrap_or_default(),
            height: height.unwrap_or_default(),
            time,
            gas_used: gas_used.unwrap_or_else(|| "0".to_string()),
            gas_wanted: gas_wanted.unwrap_or_else(|| "0".to_string()),
            fee: extract_fee(&events),
            sender: extract_sender(&events),
        })
    }
}
