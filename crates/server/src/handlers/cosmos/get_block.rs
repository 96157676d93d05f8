// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::adapters::CosmosBlock;
use crate::extractors::JsonPath;
use crate::handlers::{common, error::ApiError, error::ErrorResponse};
use crate::state::AppState;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/cosmos/block/{height}",
    tag = "cosmos",
    summary = "Get Cosmos block",
    description = "Returns the header summary of the Tendermint block at the given decimal height.",
    params(
        ("height" = String, Path, description = "Decimal block height")
    ),
    responses(
        (status = 200, description = "Block found", body = CosmosBlock),
        (status = 400, description = "Invalid height or upstream RPC error", body = ErrorResponse),
        (status = 404, description = "Block not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_cosmos_block(
    State(state): State<AppState>,
    JsonPath(height): JsonPath<String>,
) -> Result<Json<CosmosBlock>, ApiError> {
    common::block_by_height(state.cosmos.as_ref(), &height).await
}
