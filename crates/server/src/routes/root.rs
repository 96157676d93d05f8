// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root endpoint: gateway information and the list of available routes.

use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/openapi.json",
        "github": env!("CARGO_PKG_REPOSITORY"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "upstreams": {
            "evm": state.config.upstream.evm_url,
            "cosmos": state.config.upstream.cosmos_url,
        },
        "routes": state.route_registry.routes(),
    }))
}

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(registry, "/", "get", get(root_handler))
}
