// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chain-agnostic request handling shared by the per-chain handlers.

use super::error::ApiError;
use crate::adapters::ChainAdapter;
use crate::types::{BlockHeight, TxHash};
use axum::Json;

/// Validate a raw path segment as a height and look the block up.
pub async fn block_by_height<A: ChainAdapter>(
    adapter: &A,
    raw_height: &str,
) -> Result<Json<A::Block>, ApiError> {
    let height: BlockHeight = raw_height.parse()?;
    let block = adapter.get_block_by_height(&height).await?;
    Ok(Json(block))
}

/// Validate a raw path segment as a transaction hash and look it up.
pub async fn transaction_by_hash<A: ChainAdapter>(
    adapter: &A,
    raw_hash: &str,
) -> Result<Json<A::Transaction>, ApiError> {
    let hash: TxHash = raw_hash.parse()?;
    let transaction = adapter.get_transaction_by_hash(&hash).await?;
    Ok(Json(transaction))
}
