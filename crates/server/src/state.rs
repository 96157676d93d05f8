// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::adapters::{CosmosAdapter, EvmAdapter};
use crate::routes::RouteRegistry;
use crate::rpc::{HttpTransport, RpcTransport, TransportError};
use config::GatewayConfig;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub evm: Arc<EvmAdapter>,
    pub cosmos: Arc<CosmosAdapter>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// Build the state with a real HTTP transport shared by both adapters.
    pub fn new(config: GatewayConfig) -> Result<Self, TransportError> {
        let timeout = Duration::from_millis(config.upstream.timeout_ms);
        let transport = Arc::new(HttpTransport::new(timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: GatewayConfig, transport: Arc<dyn RpcTransport>) -> Self {
        let evm = Arc::new(EvmAdapter::new(
            transport.clone(),
            config.upstream.evm_url.clone(),
        ));
        let cosmos = Arc::new(CosmosAdapter::new(
            transport,
            config.upstream.cosmos_url.clone(),
        ));

        Self {
            config,
            evm,
            cosmos,
            route_registry: RouteRegistry::new(),
        }
    }
}
