// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::evm,
    routes::{RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, "/evm/block/:height", "get", get(evm::get_evm_block))
        .route_registered(
            registry,
            "/evm/transactions/:hash",
            "get",
            get(evm::get_evm_transaction),
        )
}
