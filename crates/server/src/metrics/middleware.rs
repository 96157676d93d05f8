// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Body,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Instant;

use crate::state::AppState;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES,
};

lazy_static! {
    static ref ROUTE_PATTERNS: Vec<(Regex, &'static str)> = [
        (r"^/(evm|cosmos)/block/[^/]*$", "/$1/block/:height"),
        (r"^/(evm|cosmos)/transactions/[^/]*$", "/$1/transactions/:hash"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("valid route pattern"), replacement)
    })
    .collect();
}

/// Replace path parameters with their names so label cardinality stays bounded.
///
/// `/evm/block/123` becomes `/evm/block/:height`. With `include_query_params`,
/// parameter names are appended sorted, values masked:
/// `/evm/block/:height?a=<?>&b=<?>`.
fn normalize_route(path: &str, query_string: Option<&str>, include_query_params: bool) -> String {
    let mut normalized = path.to_string();
    for (re, replacement) in ROUTE_PATTERNS.iter() {
        if re.is_match(&normalized) {
            normalized = re.replace(&normalized, *replacement).to_string();
            break;
        }
    }

    if include_query_params
        && let Some(query) = query_string
        && !query.is_empty()
    {
        let mut params: Vec<&str> = query
            .split('&')
            .filter_map(|pair| pair.split('=').next())
            .filter(|name| !name.is_empty())
            .collect();
        params.sort_unstable();

        let query_params = params
            .iter()
            .map(|name| format!("{}=<?>", name))
            .collect::<Vec<_>>()
            .join("&");

        normalized = format!("{}?{}", normalized, query_params);
    }

    normalized
}

/// Metrics middleware for tracking HTTP requests
pub async fn metrics_middleware(
    State(state): State<AppState>,
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if path == "/metrics" || path == "/metrics.json" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let include_query_params = state.config.metrics.include_queryparams;
    let route = match matched_path {
        Some(matched) if !include_query_params => matched.as_str().to_string(),
        _ => normalize_route(&path, req.uri().query(), include_query_params),
    };

    let response = next.run(req).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status();
    let status_code = status.as_u16().to_string();

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, &status_code])
        .observe(duration);

    // Buffer the body to measure it, then hand it back unchanged
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &route, &status_code])
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}
