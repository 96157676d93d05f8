// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod cosmos;
pub mod docs;
pub mod evm;
pub mod health;
pub mod metrics;
pub mod registry;
pub mod root;
pub mod version;

pub use registry::{RegisterRoute, RouteInfo, RouteRegistry};
