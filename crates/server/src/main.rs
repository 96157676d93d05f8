// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use config::{Args, GatewayConfig};
use server::{app, logging, metrics, state::AppState};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = GatewayConfig::from_env_file(&args.env_file)
        .with_context(|| format!("Failed to load configuration (env file: {})", args.env_file))?;

    let _log_guard = logging::init(&config.log)?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix);
    }

    let addr: SocketAddr = format!("{}:{}", config.express.bind_host, config.express.port)
        .parse()
        .context("Invalid listen address")?;

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Log level: {}", config.log.level);
    tracing::info!("EVM RPC: {}", config.upstream.evm_url);
    tracing::info!("Cosmos RPC: {}", config.upstream.cosmos_url);
    if config.metrics.enabled {
        tracing::info!(
            "Metrics enabled with prefix '{}'",
            config.metrics.prometheus_prefix
        );
    }

    let state = AppState::new(config)?;
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. A signal that fails to install never resolves.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
