// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::adapters::AdapterError;
use crate::types::ValidationError;
use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("{0}")]
    InvalidPath(String),

    #[error("Cannot {method} {path}")]
    RouteNotFound { method: Method, path: String },
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::InvalidPath(_)
            | ApiError::Adapter(AdapterError::Rpc(_)) => StatusCode::BAD_REQUEST,
            ApiError::Adapter(AdapterError::BlockNotFound)
            | ApiError::Adapter(AdapterError::TransactionNotFound)
            | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Adapter(AdapterError::Transport(_))
            | ApiError::Adapter(AdapterError::InvalidResponse(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            INTERNAL_SERVER_ERROR.to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            status_code: status.as_u16(),
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for paths no route matched, and for known paths called with a
/// method they do not serve.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
