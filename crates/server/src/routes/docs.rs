// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    openapi::ApiDoc,
    routes::{RegisterRoute, RouteRegistry},
    state::AppState,
};
use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(registry, "/openapi.json", "get", get(get_openapi))
}
