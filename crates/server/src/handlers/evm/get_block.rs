// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::adapters::EvmBlock;
use crate::extractors::JsonPath;
use crate::handlers::{common, error::ApiError, error::ErrorResponse};
use crate::state::AppState;
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/evm/block/{height}",
    tag = "evm",
    summary = "Get EVM block",
    description = "Returns the header summary of the EVM block at the given decimal height.",
    params(
        ("height" = String, Path, description = "Decimal block height")
    ),
    responses(
        (status = 200, description = "Block found", body = EvmBlock),
        (status = 400, description = "Invalid height or upstream RPC error", body = ErrorResponse),
        (status = 404, description = "Block not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_evm_block(
    State(state): State<AppState>,
    JsonPath(height): JsonPath<String>,
) -> Result<Json<EvmBlock>, ApiError> {
    common::block_by_height(state.evm.as_ref(), &height).await
}
