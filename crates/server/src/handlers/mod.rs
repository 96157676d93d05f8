// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod common;
pub mod cosmos;
pub mod error;
pub mod evm;
pub mod health;
pub mod metrics;
pub mod version;

pub use error::{ApiError, ErrorResponse};
