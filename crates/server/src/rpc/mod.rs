// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Upstream JSON-RPC plumbing shared by the chain adapters.
//!
//! The adapters never talk to `reqwest` directly; they go through [`RpcTransport`],
//! which keeps them testable against canned responses.

pub mod envelope;
pub mod transport;

pub use envelope::{JsonRpcRequest, RpcErrorObject, RpcResponse};
pub use transport::{HttpTransport, RpcTransport, TransportError};
