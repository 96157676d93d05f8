// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::{Mutex, Once};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error(transparent)]
    Encode(#[from] prometheus::Error),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);
    static ref INIT_ONCE: Once = Once::new();

    // Created unregistered; `init` attaches them to the prefixed registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![64.0, 128.0, 256.0, 512.0, 1024.0, 4096.0, 16384.0, 65536.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref UPSTREAM_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("upstream_requests", "Number of upstream RPC calls"),
        &["chain", "method", "outcome"]
    )
    .expect("Failed to create upstream_requests counter");

    pub static ref UPSTREAM_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "upstream_duration_seconds",
            "Duration of upstream RPC calls in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]),
        &["chain", "method", "outcome"]
    )
    .expect("Failed to create upstream_duration_seconds histogram");
}

/// Register every metric with a registry using `prefix`. Later calls are no-ops.
pub fn init(prefix: &str) {
    INIT_ONCE.call_once(|| {
        let registry = Registry::new_custom(Some(prefix.to_string()), None)
            .expect("Failed to create Prometheus registry");

        registry
            .register(Box::new(HTTP_REQUESTS.clone()))
            .expect("Failed to register http_requests");
        registry
            .register(Box::new(HTTP_REQUEST_SUCCESS.clone()))
            .expect("Failed to register http_request_success");
        registry
            .register(Box::new(HTTP_REQUEST_ERROR.clone()))
            .expect("Failed to register http_request_error");
        registry
            .register(Box::new(REQUEST_DURATION_SECONDS.clone()))
            .expect("Failed to register request_duration_seconds");
        registry
            .register(Box::new(RESPONSE_SIZE_BYTES.clone()))
            .expect("Failed to register response_size_bytes");
        registry
            .register(Box::new(UPSTREAM_REQUESTS.clone()))
            .expect("Failed to register upstream_requests");
        registry
            .register(Box::new(UPSTREAM_DURATION_SECONDS.clone()))
            .expect("Failed to register upstream_duration_seconds");

        if let Ok(mut slot) = REGISTRY.lock() {
            *slot = Some(registry);
        }
    });
}

/// Count and time one upstream call. Works whether or not `init` ran.
pub fn record_upstream_call(chain: &str, method: &str, outcome: &str, duration_secs: f64) {
    UPSTREAM_REQUESTS
        .with_label_values(&[chain, method, outcome])
        .inc();
    UPSTREAM_DURATION_SECONDS
        .with_label_values(&[chain, method, outcome])
        .observe(duration_secs);
}

pub fn gather_metric_families() -> Result<Vec<MetricFamily>, GatherError> {
    let guard = REGISTRY.lock().map_err(|_| GatherError::NotInitialized)?;
    let registry = guard.as_ref().ok_or(GatherError::NotInitialized)?;
    Ok(registry.gather())
}

/// Gather all metrics in the Prometheus text format.
pub fn gather_metrics() -> Result<String, GatherError> {
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
