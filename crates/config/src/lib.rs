// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod express;
mod log;
mod metrics;
mod upstream;

pub use args::Args;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::{LogConfig, VALID_LEVELS};
pub use metrics::{MetricsConfig, MetricsError};
pub use upstream::{UpstreamConfig, UpstreamError};

use serde::Deserialize;
use std::path::Path;

/// Prefix shared by every environment variable the gateway reads.
pub const ENV_PREFIX: &str = "CGW_";

#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub metrics: MetricsConfig,
    pub upstream: UpstreamConfig,
}

/// Flat view of the environment, as `envy` sees it. Split into sections by
/// [`GatewayConfig::from_env`].
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prometheus_prefix")]
    metrics_prometheus_prefix: String,
    #[serde(default)]
    metrics_include_queryparams: bool,

    #[serde(default = "upstream::default_evm_url")]
    evm_url: String,
    #[serde(default = "upstream::default_cosmos_url")]
    cosmos_url: String,
    #[serde(default = "upstream::default_timeout_ms")]
    rpc_timeout_ms: u64,
}

impl From<EnvConfig> for GatewayConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prometheus_prefix,
                include_queryparams: env.metrics_include_queryparams,
            },
            upstream: UpstreamConfig {
                evm_url: env.evm_url,
                cosmos_url: env.cosmos_url,
                timeout_ms: env.rpc_timeout_ms,
            },
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `CGW_*` environment variables and validate it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load variables from `path` into the process environment (if the file
    /// exists), then behave like [`GatewayConfig::from_env`].
    ///
    /// Variables already present in the environment take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
                path: path.display().to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.metrics.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}
