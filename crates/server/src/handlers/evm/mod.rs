// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod get_block;
pub mod get_transaction;

pub use get_block::get_evm_block;
pub use get_transaction::get_evm_transaction;
