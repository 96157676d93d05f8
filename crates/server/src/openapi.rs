// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chain Gateway",
        description = "REST gateway serving normalized block and transaction lookups for an EVM JSON-RPC node and a Cosmos-SDK / Tendermint RPC node.",
        license(name = "GPL-3.0-or-later"),
        contact(url = "https://github.com/paritytech/chain-gateway")
    ),
    servers(
        (url = "http://localhost:8080", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "Gateway version"),
        (name = "evm", description = "EVM blocks and transactions"),
        (name = "cosmos", description = "Cosmos-SDK blocks and transactions"),
    ),
    paths(
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        crate::handlers::evm::get_block::get_evm_block,
        crate::handlers::evm::get_transaction::get_evm_transaction,
        crate::handlers::cosmos::get_block::get_cosmos_block,
        crate::handlers::cosmos::get_transaction::get_cosmos_transaction,
    ),
    components(schemas(
        crate::adapters::EvmBlock,
        crate::adapters::EvmTransaction,
        crate::adapters::CosmosBlock,
        crate::adapters::CosmosTransaction,
        crate::adapters::CosmosFee,
        crate::handlers::ErrorResponse,
    ))
)]
pub struct ApiDoc;
