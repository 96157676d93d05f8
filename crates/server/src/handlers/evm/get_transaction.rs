// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::adapters::EvmTransaction;
use crate::extractors::JsonPath;
use crate::handlers::{common, error::ApiError, error::ErrorResponse};
use crate::state::AppState;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/evm/transactions/{hash}",
    tag = "evm",
    summary = "Get EVM transaction",
    description = "Returns an EVM transaction by hash. Fee fields appear only when the node reports them.",
    params(
        ("hash" = String, Path, description = "32-byte transaction hash, with or without 0x")
    ),
    responses(
        (status = 200, description = "Transaction found", body = EvmTransaction),
        (status = 400, description = "Invalid hash or upstream RPC error", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_evm_transaction(
    State(state): State<AppState>,
    JsonPath(hash): JsonPath<String>,
) -> Result<Json<EvmTransaction>, ApiError> {
    common::transaction_by_hash(state.evm.as_ref(), &hash).await
}
