// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extractors that answer rejections with the gateway's error envelope.

use crate::handlers::error::ApiError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// A `Path` extractor whose rejection is an [`ApiError`] instead of plain text.
///
/// Used for every path parameter so a segment that fails to decode (for
/// example invalid percent-encoded UTF-8) still gets a 400 envelope.
pub struct JsonPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for JsonPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(JsonPath(value)),
            Err(rejection) => Err(path_error(rejection)),
        }
    }
}

fn path_error(rejection: PathRejection) -> ApiError {
    ApiError::InvalidPath(rejection.body_text())
}
