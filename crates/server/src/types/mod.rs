// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validated request parameters.
//!
//! Path segments are parsed into these newtypes before any upstream call is
//! made, so the adapters only ever see well-formed heights and hashes.

pub mod hash;
pub mod height;

pub use hash::TxHash;
pub use height::BlockHeight;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Block height is required")]
    MissingHeight,

    #[error("Invalid block number")]
    InvalidHeight,

    #[error("Transaction hash is required")]
    MissingHash,

    #[error("Invalid transaction hash format")]
    InvalidHash,
}
