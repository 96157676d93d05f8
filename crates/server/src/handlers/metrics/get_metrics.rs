// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, http::StatusCode, response::IntoResponse};
use prometheus::proto::{Metric, MetricFamily};
use serde_json::{Value, json};

/// Handler for Prometheus metrics endpoint (text format)
pub async fn get_metrics() -> impl IntoResponse {
    match crate::metrics::gather_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            metrics,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to gather metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to gather metrics: {}", e),
            )
                .into_response()
        }
    }
}

fn metric_value(metric: &Metric) -> Value {
    if metric.has_counter() {
        json!(metric.get_counter().get_value())
    } else if metric.has_histogram() {
        let h = metric.get_histogram();
        json!({
            "sample_count": h.get_sample_count(),
            "sample_sum": h.get_sample_sum(),
        })
    } else {
        Value::Null
    }
}

fn family_to_json(family: &MetricFamily) -> Value {
    let metrics: Vec<Value> = family
        .get_metric()
        .iter()
        .map(|m| {
            let labels: Vec<Value> = m
                .get_label()
                .iter()
                .map(|l| json!({"name": l.get_name(), "value": l.get_value()}))
                .collect();
            json!({"labels": labels, "value": metric_value(m)})
        })
        .collect();

    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": metrics,
    })
}

/// Handler for metrics in JSON format
pub async fn get_metrics_json() -> impl IntoResponse {
    match crate::metrics::gather_metric_families() {
        Ok(families) => {
            let body: Vec<Value> = families.iter().map(family_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to gather metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to gather metrics: {}", e),
            )
                .into_response()
        }
    }
}
