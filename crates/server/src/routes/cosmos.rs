// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::cosmos,
    routes::{RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            "/cosmos/block/:height",
            "get",
            get(cosmos::get_cosmos_block),
        )
        .route_registered(
            registry,
            "/cosmos/transactions/:hash",
            "get",
            get(cosmos::get_cosmos_transaction),
        )
}
