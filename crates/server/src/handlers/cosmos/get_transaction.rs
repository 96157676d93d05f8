// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::adapters::CosmosTransaction;
use crate::extractors::JsonPath;
use crate::handlers::{common, error::ApiError, error::ErrorResponse};
use crate::state::AppState;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/cosmos/transactions/{hash}",
    tag = "cosmos",
    summary = "Get Cosmos transaction",
    description = "Returns a Cosmos-SDK transaction with fee and sender taken from its events. \
        `time` is empty when the including block could not be fetched.",
    params(
        ("hash" = String, Path, description = "32-byte transaction hash, with or without 0x")
    ),
    responses(
        (status = 200, description = "Transaction found", body = CosmosTransaction),
        (status = 400, description = "Invalid hash or upstream RPC error", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_cosmos_transaction(
    State(state): State<AppState>,
    JsonPath(hash): JsonPath<String>,
) -> Result<Json<CosmosTransaction>, ApiError> {
    common::transaction_by_hash(state.cosmos.as_ref(), &hash).await
}
