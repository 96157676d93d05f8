// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

macro_rules! http_event {
    ($level:ident, $method:expr, $path:expr, $status:expr, $duration_ms:expr) => {
        tracing::$level!(
            target: "http",
            method = %$method,
            path = %$path,
            status = $status,
            duration_ms = $duration_ms,
            "{} {} {} {}ms",
            $method,
            $path,
            $status,
            $duration_ms
        )
    };
}

/// One event per request under the `http` target, e.g. `GET /evm/block/1 200 45ms`.
///
/// 2xx/3xx log at DEBUG (visible with `CGW_LOG_LEVEL=http`), 4xx at WARN and
/// 5xx at ERROR.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(q) => format!("{}?{}", req.uri().path(), q),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    match status {
        200..=399 => http_event!(debug, method, path, status, duration_ms),
        400..=499 => http_event!(warn, method, path, status, duration_ms),
        _ => http_event!(error, method, path, status, duration_ms),
    }

    response
}
